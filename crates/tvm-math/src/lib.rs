//! # Tvm Math
//!
//! Numerical root finding for the Tvm time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson with domain clamping, bisection
//! - **Bracket search**: geometric expansion until a sign change is found
//! - **Escalation**: Newton first, bracket search + bisection as the fallback
//!
//! ## Design Philosophy
//!
//! - **No financial knowledge**: equations come in as closures or [`solvers::Residual`]s
//! - **Explicit failure**: a solver either converges or returns a [`MathError`],
//!   never an unconverged guess
//! - **Pure**: no shared state, safe to call from any number of threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, central_difference, find_bracket, newton_raphson, solve_escalating, Bracket,
        BracketConfig, EscalationConfig, Residual, Resolution, SolverConfig, SolverResult, Stage,
    };
}

pub use error::{MathError, MathResult};
