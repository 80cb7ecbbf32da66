//! # Tvm Core
//!
//! Core types and input handling for the Tvm time-value-of-money library.
//!
//! This crate provides the foundational building blocks used throughout Tvm:
//!
//! - **Types**: [`CashFlowSeries`](types::CashFlowSeries),
//!   [`RateBounds`](types::RateBounds), [`PaymentTiming`](types::PaymentTiming)
//! - **Validation**: Eager precondition checks with named, readable errors
//! - **Rounding**: Currency rounding through `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use tvm_core::prelude::*;
//!
//! let series = CashFlowSeries::new(vec![-1000.0, 1100.0]).unwrap();
//! let bounds = RateBounds::new(-0.99, 10.0).unwrap();
//! assert!(series.has_sign_change());
//! assert!(bounds.contains(0.1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod rounding;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rounding::{round_cents, round_to_currency, RoundingMode};
    pub use crate::types::{CashFlowSeries, InflationDirection, PaymentTiming, RateBounds};
}

pub use error::{CoreError, CoreResult};
