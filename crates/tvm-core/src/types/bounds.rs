//! Search domain for per-period rates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::validation::{finite, rate_above_floor};

/// A validated `(lower, upper)` interval of per-period rates.
///
/// Invariants: `lower > -1` and `upper > lower`. Violations are rejected,
/// never clamped, since clamping would silently change the economic meaning
/// of the answer.
///
/// # Example
///
/// ```rust
/// use tvm_core::types::RateBounds;
///
/// let bounds = RateBounds::new(-0.99, 10.0).unwrap();
/// assert!(bounds.contains(0.05));
/// assert!(RateBounds::new(-1.0, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct RateBounds {
    lower: f64,
    upper: f64,
}

impl RateBounds {
    /// Creates validated bounds.
    pub fn new(lower: f64, upper: f64) -> CoreResult<Self> {
        rate_above_floor(lower, "lower_bound")?;
        finite(upper, "upper_bound")?;
        if upper <= lower {
            return Err(CoreError::invalid_input(
                "upper_bound",
                "greater than lower_bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Lower end of the domain.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper end of the domain.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if `rate` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.lower && rate <= self.upper
    }

    /// The bounds as a `(lower, upper)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl TryFrom<(f64, f64)> for RateBounds {
    type Error = CoreError;

    fn try_from((lower, upper): (f64, f64)) -> CoreResult<Self> {
        Self::new(lower, upper)
    }
}

impl From<RateBounds> for (f64, f64) {
    fn from(bounds: RateBounds) -> Self {
        bounds.as_tuple()
    }
}

impl fmt::Display for RateBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let bounds = RateBounds::new(0.0, 1.0).unwrap();
        assert_eq!(bounds.as_tuple(), (0.0, 1.0));
        assert!(bounds.contains(1.0));
        assert!(!bounds.contains(1.5));
    }

    #[test]
    fn test_rejects_floor_violation() {
        let err = RateBounds::new(-1.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "lower_bound must be > -1");
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(RateBounds::new(0.5, 0.5).is_err());
        assert!(RateBounds::new(0.5, 0.2).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(RateBounds::new(0.0, f64::INFINITY).is_err());
        assert!(RateBounds::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let bounds: RateBounds = serde_json::from_str("[-0.5, 2.0]").unwrap();
        assert_eq!(bounds.lower(), -0.5);
        assert!(serde_json::from_str::<RateBounds>("[-2.0, 2.0]").is_err());
    }
}
