//! Input validation helpers.
//!
//! Each helper returns the value unchanged on success so checks can be
//! chained inline: `let n = positive(periods, "periods")?;`

use crate::error::{CoreError, CoreResult};

/// Requires `value` to be neither NaN nor infinite.
pub fn finite(value: f64, name: &str) -> CoreResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::invalid_input(name, "a finite number"))
    }
}

/// Requires `value` to be finite and `>= 0`.
pub fn non_negative(value: f64, name: &str) -> CoreResult<f64> {
    finite(value, name)?;
    if value < 0.0 {
        return Err(CoreError::invalid_input(name, ">= 0"));
    }
    Ok(value)
}

/// Requires `value` to be finite and `> 0`.
pub fn positive(value: f64, name: &str) -> CoreResult<f64> {
    finite(value, name)?;
    if value <= 0.0 {
        return Err(CoreError::invalid_input(name, "> 0"));
    }
    Ok(value)
}

/// Requires a per-period rate strictly above -100%.
///
/// At or below -1 the growth factor `1 + r` is zero or negative and
/// fractional powers of it are undefined.
pub fn rate_above_floor(rate: f64, name: &str) -> CoreResult<f64> {
    finite(rate, name)?;
    if rate <= -1.0 {
        return Err(CoreError::invalid_input(name, "> -1"));
    }
    Ok(rate)
}

/// Requires an iteration budget of at least one.
pub fn positive_iterations(iterations: u32, name: &str) -> CoreResult<u32> {
    if iterations == 0 {
        return Err(CoreError::invalid_input(name, "a positive integer"));
    }
    Ok(iterations)
}
