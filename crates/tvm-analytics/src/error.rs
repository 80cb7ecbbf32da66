//! Unified error types for the analytics crate.
//!
//! Two tiers: precondition violations ([`AnalyticsError::Core`],
//! [`AnalyticsError::InvalidInput`], [`AnalyticsError::InvalidConfig`]) are
//! raised before any iteration; [`AnalyticsError::SolverConvergenceFailed`]
//! is the distinct "did not converge" outcome.

use thiserror::Error;
use tvm_core::CoreError;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input rejected by a core validation helper.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Solver configuration could not be loaded or failed validation
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Every solver stage failed to locate a root
    #[error("{solver} did not converge after {iterations} iterations: {reason}")]
    SolverConvergenceFailed {
        /// Which rate solver failed.
        solver: String,
        /// Iteration budget per stage.
        iterations: u32,
        /// Underlying solver failure.
        reason: String,
    },
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Returns true for the "did not converge" outcome.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, AnalyticsError::SolverConvergenceFailed { .. })
    }
}
