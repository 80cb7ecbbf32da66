//! Excel-compatible time-value-of-money functions.
//!
//! All functions use Excel's sign convention: money paid out is negative,
//! money received is positive. A loan taken (`present_value > 0`) implies
//! negative payments.
//!
//! - [`fv`]: FV(rate, nper, pmt, pv, type)
//! - [`pv`]: PV(rate, nper, pmt, fv, type)
//! - [`pmt`]: PMT(rate, nper, pv, fv, type)
//! - [`nper`]: NPER(rate, pmt, pv, fv, type)
//! - [`npv`]: NPV with the first flow at period 0
//!
//! RATE, the inverse that needs a root finder, lives in [`crate::rates`].

mod npv;

pub use npv::{npv, NpvEquation};

use tvm_core::types::PaymentTiming;
use tvm_core::validation::{finite, positive, rate_above_floor};

use crate::error::AnalyticsResult;

/// Closed-form FV without validation, shared by [`fv`] and the rate solvers.
///
/// At `rate == 0` the annuity factor degenerates to `periods`.
pub(crate) fn future_value_of_flows(
    rate: f64,
    periods: f64,
    payment: f64,
    present_value: f64,
    timing: PaymentTiming,
) -> f64 {
    if rate == 0.0 {
        return -(present_value + payment * periods);
    }

    let growth = (1.0 + rate).powf(periods);
    let payment_fv = payment * ((growth - 1.0) / rate) * timing.due_factor(rate);
    -(present_value * growth + payment_fv)
}

/// Excel FV: value after `periods` of a present value plus level payments.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::tvm::fv;
/// use tvm_core::types::PaymentTiming;
///
/// // 100 deposited now at 10% grows to 121 after two periods (received: positive)
/// let value = fv(0.10, 2.0, 0.0, -100.0, PaymentTiming::End).unwrap();
/// assert!((value - 121.0).abs() < 1e-9);
/// ```
pub fn fv(
    rate: f64,
    periods: f64,
    payment: f64,
    present_value: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    finite(rate, "rate")?;
    positive(periods, "periods")?;
    finite(payment, "payment")?;
    finite(present_value, "present_value")?;

    Ok(future_value_of_flows(
        rate,
        periods,
        payment,
        present_value,
        timing,
    ))
}

/// Excel PV: present value of a future value plus level payments.
pub fn pv(
    rate: f64,
    periods: f64,
    payment: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    finite(rate, "rate")?;
    positive(periods, "periods")?;
    finite(payment, "payment")?;
    finite(future_value, "future_value")?;

    if rate == 0.0 {
        return Ok(-(future_value + payment * periods));
    }

    let growth = (1.0 + rate).powf(periods);
    let payment_pv = payment * (1.0 - 1.0 / growth) / rate * timing.due_factor(rate);
    Ok(-future_value / growth - payment_pv)
}

/// Excel PMT: level payment that moves `present_value` to `future_value`.
pub fn pmt(
    rate: f64,
    periods: f64,
    present_value: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    finite(rate, "rate")?;
    positive(periods, "periods")?;
    finite(present_value, "present_value")?;
    finite(future_value, "future_value")?;

    if rate == 0.0 {
        return Ok(-(present_value + future_value) / periods);
    }

    let growth = (1.0 + rate).powf(periods);
    let numerator = -(future_value + present_value * growth) * rate;
    let denominator = (growth - 1.0) * timing.due_factor(rate);
    Ok(numerator / denominator)
}

/// Excel NPER: number of periods for the given payment to move
/// `present_value` to `future_value`.
///
/// Returns `NaN` when no non-negative period count satisfies the equation
/// (for instance a payment that never covers the interest).
///
/// # Errors
///
/// Rejects non-finite inputs and `rate <= -1`.
pub fn nper(
    rate: f64,
    payment: f64,
    present_value: f64,
    future_value: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    rate_above_floor(rate, "rate")?;
    finite(payment, "payment")?;
    finite(present_value, "present_value")?;
    finite(future_value, "future_value")?;

    if rate == 0.0 {
        let linear = -(present_value + future_value) / payment;
        return Ok(if linear.is_finite() && linear >= 0.0 {
            linear
        } else {
            f64::NAN
        });
    }

    let adjusted_payment = payment * timing.due_factor(rate);
    let numerator = adjusted_payment - future_value * rate;
    let denominator = adjusted_payment + present_value * rate;
    if numerator == 0.0 || denominator == 0.0 {
        return Ok(f64::NAN);
    }
    let ratio = numerator / denominator;
    if ratio <= 0.0 {
        return Ok(f64::NAN);
    }

    let periods = ratio.ln() / (1.0 + rate).ln();
    Ok(if periods.is_finite() { periods } else { f64::NAN })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmt_and_fv_pay_off_loan() {
        let payment = pmt(0.06 / 12.0, 360.0, 250_000.0, 0.0, PaymentTiming::End).unwrap();
        let future = fv(0.06 / 12.0, 360.0, payment, 250_000.0, PaymentTiming::End).unwrap();

        assert_relative_eq!(payment, -1498.876, epsilon = 1e-3);
        assert!(future.abs() < 1e-6);
    }

    #[test]
    fn test_pv_inverts_fv_annuity_due() {
        let rate = 0.07 / 12.0;
        let present = pv(rate, 60.0, -300.0, 10_000.0, PaymentTiming::Begin).unwrap();
        let future = fv(rate, 60.0, -300.0, present, PaymentTiming::Begin).unwrap();

        assert_relative_eq!(future, 10_000.0, epsilon = 1e-8);
    }

    #[test]
    fn test_nper_inverts_pmt() {
        let rate = 0.08 / 12.0;
        let payment = pmt(rate, 48.0, 15_000.0, 0.0, PaymentTiming::End).unwrap();
        let periods = nper(rate, payment, 15_000.0, 0.0, PaymentTiming::End).unwrap();

        assert_relative_eq!(periods, 48.0, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_rate() {
        assert_relative_eq!(
            fv(0.0, 10.0, -100.0, -1000.0, PaymentTiming::End).unwrap(),
            2000.0
        );
        assert_relative_eq!(
            pmt(0.0, 10.0, 1000.0, 0.0, PaymentTiming::End).unwrap(),
            -100.0
        );
        assert_relative_eq!(
            nper(0.0, -100.0, 1000.0, 0.0, PaymentTiming::End).unwrap(),
            10.0
        );
    }

    #[test]
    fn test_nper_rejects_rate_floor() {
        assert!(nper(-1.0, -100.0, 1000.0, 0.0, PaymentTiming::End).is_err());
    }

    #[test]
    fn test_nper_unreachable_is_nan() {
        // Payment never covers the 1% interest on 10 000
        let periods = nper(0.01, -50.0, 10_000.0, 0.0, PaymentTiming::End).unwrap();
        assert!(periods.is_nan());
    }

    #[test]
    fn test_loan_sign_convention() {
        let borrowed = pmt(0.005, 360.0, 250_000.0, 0.0, PaymentTiming::End).unwrap();
        let lent = pmt(0.005, 360.0, -250_000.0, 0.0, PaymentTiming::End).unwrap();
        assert!(borrowed < 0.0);
        assert!(lent > 0.0);
    }

    #[test]
    fn test_rejects_non_positive_periods() {
        let err = fv(0.05, 0.0, 0.0, 100.0, PaymentTiming::End).unwrap_err();
        assert_eq!(err.to_string(), "periods must be > 0");
    }
}
