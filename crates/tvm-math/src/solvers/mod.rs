//! Root-finding algorithms.
//!
//! This module provides the numerical building blocks used by the rate solvers:
//!
//! - [`newton_raphson`]: Quadratic convergence, iterate clamped into a domain
//! - [`bisection`]: Slow but guaranteed once a sign change is bracketed
//! - [`find_bracket`]: Expands a search interval until a sign change appears
//! - [`solve_escalating`]: Newton first, then bracket search + bisection
//!
//! None of these know anything about finance. Callers describe the equation
//! through the [`Residual`] trait (or plain closures) and get back either a
//! converged [`SolverResult`] or a [`MathError`](crate::MathError) explaining
//! why no root was produced.
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May stall or diverge | Derivative, domain |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Escalating | Fast | Falls back to bisection | Residual, domain |
//!
//! # Example: discount rate of a single payment
//!
//! ```rust
//! use tvm_math::solvers::{solve_escalating, EscalationConfig, Residual};
//!
//! struct Discount;
//!
//! impl Residual for Discount {
//!     fn value(&self, r: f64) -> f64 {
//!         -100.0 + 121.0 / (1.0 + r).powi(2)
//!     }
//! }
//!
//! let result = solve_escalating(&Discount, 0.05, (-0.99, 10.0), &EscalationConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-9);
//! ```

mod bisection;
mod bracket;
mod escalation;
mod newton;

pub use bisection::bisection;
pub use bracket::{find_bracket, Bracket};
pub use escalation::{solve_escalating, EscalationConfig, Resolution, Stage, ESCALATION_ORDER};
pub use newton::newton_raphson;

use serde::{Deserialize, Serialize};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivatives smaller than this are treated as a stationary point.
pub const MIN_DERIVATIVE: f64 = 1e-14;

/// Default number of bracket expansion rounds.
pub const DEFAULT_BRACKET_ROUNDS: u32 = 20;

/// Lowest per-period rate the bracket search will move to.
pub const RATE_FLOOR: f64 = -0.999_999_999;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum number of iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Configuration for [`find_bracket`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketConfig {
    /// Number of expansion rounds before giving up.
    #[serde(default = "default_bracket_rounds")]
    pub max_rounds: u32,
    /// The lower end never moves below this value.
    #[serde(default = "default_floor")]
    pub floor: f64,
}

fn default_bracket_rounds() -> u32 {
    DEFAULT_BRACKET_ROUNDS
}

fn default_floor() -> f64 {
    RATE_FLOOR
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_BRACKET_ROUNDS,
            floor: RATE_FLOOR,
        }
    }
}

/// A scalar equation whose root is sought.
///
/// Implementors are immutable context records: the captured parameters fully
/// determine the residual, so the same value can be evaluated any number of
/// times and shared across threads.
pub trait Residual {
    /// The signed residual at `x` (computed value minus target value).
    fn value(&self, x: f64) -> f64;

    /// The derivative of the residual at `x`.
    ///
    /// Defaults to a central finite difference.
    fn derivative(&self, x: f64) -> f64 {
        central_difference(|t| self.value(t), x)
    }
}

impl<R: Residual + ?Sized> Residual for &R {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// Step used by [`central_difference`] at `x`.
///
/// Relative (`|x| * 1e-6`) away from zero, absolute `1e-6` near zero.
#[must_use]
pub fn difference_step(x: f64) -> f64 {
    if x.abs() > 1e-5 {
        x.abs() * 1e-6
    } else {
        1e-6
    }
}

/// Central finite-difference derivative of `f` at `x`.
pub fn central_difference<F>(f: F, x: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = difference_step(x);
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
