//! Currency rounding.
//!
//! Rounding goes through [`Decimal`] so midpoints such as `2.125` are
//! detected exactly rather than through scaled binary floats.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::finite;

/// Default number of decimal places for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

/// How midpoints are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Midpoints round away from zero: 2.125 -> 2.13.
    #[default]
    HalfUp,
    /// Banker's rounding, midpoints go to the even digit: 2.125 -> 2.12.
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Rounds `value` to `decimals` places using `mode`.
///
/// # Errors
///
/// Returns an error if `value` is not finite or is outside the range
/// representable by [`Decimal`].
///
/// # Example
///
/// ```rust
/// use tvm_core::rounding::{round_to_currency, RoundingMode};
///
/// assert_eq!(round_to_currency(2.125, 2, RoundingMode::HalfUp).unwrap(), 2.13);
/// assert_eq!(round_to_currency(2.125, 2, RoundingMode::HalfEven).unwrap(), 2.12);
/// ```
pub fn round_to_currency(value: f64, decimals: u32, mode: RoundingMode) -> CoreResult<f64> {
    finite(value, "value")?;

    let decimal = Decimal::from_f64(value).ok_or_else(|| CoreError::Rounding {
        value: value.to_string(),
        reason: "outside decimal range".to_string(),
    })?;

    decimal
        .round_dp_with_strategy(decimals, mode.strategy())
        .to_f64()
        .ok_or_else(|| CoreError::Rounding {
            value: value.to_string(),
            reason: "result not representable as f64".to_string(),
        })
}

/// Rounds to cents, half-up.
pub fn round_cents(value: f64) -> CoreResult<f64> {
    round_to_currency(value, CURRENCY_DECIMALS, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_up() {
        assert_eq!(round_to_currency(2.125, 2, RoundingMode::HalfUp).unwrap(), 2.13);
        assert_eq!(round_to_currency(2.124, 2, RoundingMode::HalfUp).unwrap(), 2.12);
    }

    #[test]
    fn test_half_even() {
        assert_eq!(round_to_currency(2.125, 2, RoundingMode::HalfEven).unwrap(), 2.12);
        assert_eq!(round_to_currency(2.375, 2, RoundingMode::HalfEven).unwrap(), 2.38);
        assert_eq!(round_to_currency(2.5, 0, RoundingMode::HalfEven).unwrap(), 2.0);
    }

    #[test]
    fn test_custom_decimals() {
        assert_eq!(round_to_currency(2.1256, 3, RoundingMode::HalfUp).unwrap(), 2.126);
    }

    #[test]
    fn test_negative_half_up_rounds_away_from_zero() {
        assert_eq!(round_cents(-2.125).unwrap(), -2.13);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(round_cents(f64::NAN).is_err());
    }
}
