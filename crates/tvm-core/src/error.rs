//! Error types for the Tvm library.
//!
//! Precondition violations are rejected eagerly, before any iteration,
//! with a human-readable reason naming the offending input.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An input failed validation.
    #[error("{name} must be {reason}")]
    InvalidInput {
        /// Name of the offending input.
        name: String,
        /// The requirement that was violated.
        reason: String,
    },

    /// A value could not be represented for decimal rounding.
    #[error("Cannot round {value}: {reason}")]
    Rounding {
        /// The value as text.
        value: String,
        /// Why it could not be rounded.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
