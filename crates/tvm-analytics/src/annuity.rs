//! Level-payment annuities, ordinary and due.
//!
//! Amounts are unsigned here, unlike the Excel functions in [`crate::tvm`].

use tvm_core::types::PaymentTiming;
use tvm_core::validation::{non_negative, rate_above_floor};

use crate::error::AnalyticsResult;

/// Present value of `periods` payments of `payment_per_period`.
///
/// `PV = PMT · (1 - (1 + r)^-n) / r`, scaled by `1 + r` for an annuity due.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::annuity::present_value_of_annuity;
/// use tvm_core::types::PaymentTiming;
///
/// let pv = present_value_of_annuity(100.0, 0.0, 12.0, PaymentTiming::End).unwrap();
/// assert_eq!(pv, 1200.0);
/// ```
pub fn present_value_of_annuity(
    payment_per_period: f64,
    rate_per_period: f64,
    periods: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    non_negative(payment_per_period, "payment_per_period")?;
    rate_above_floor(rate_per_period, "rate_per_period")?;
    non_negative(periods, "periods")?;

    if periods == 0.0 {
        return Ok(0.0);
    }
    if rate_per_period == 0.0 {
        return Ok(payment_per_period * periods);
    }

    let ordinary =
        payment_per_period * (1.0 - (1.0 + rate_per_period).powf(-periods)) / rate_per_period;
    Ok(ordinary * timing.due_factor(rate_per_period))
}

/// Level payment that repays `present_value` over `periods`.
///
/// `PMT = PV · r / (1 - (1 + r)^-n)`, divided by `1 + r` for an annuity due.
pub fn payment_from_present_value(
    present_value: f64,
    rate_per_period: f64,
    periods: f64,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    non_negative(present_value, "present_value")?;
    rate_above_floor(rate_per_period, "rate_per_period")?;
    non_negative(periods, "periods")?;

    if present_value == 0.0 || periods == 0.0 {
        return Ok(0.0);
    }
    if rate_per_period == 0.0 {
        return Ok(present_value / periods);
    }

    let ordinary =
        rate_per_period * present_value / (1.0 - (1.0 + rate_per_period).powf(-periods));
    Ok(ordinary / timing.due_factor(rate_per_period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ordinary_annuity() {
        let pv = present_value_of_annuity(1000.0, 0.05, 10.0, PaymentTiming::End).unwrap();
        assert_relative_eq!(pv, 7721.734_929_184_818, epsilon = 1e-6);
    }

    #[test]
    fn test_due_is_one_period_richer() {
        let end = present_value_of_annuity(1000.0, 0.05, 10.0, PaymentTiming::End).unwrap();
        let begin = present_value_of_annuity(1000.0, 0.05, 10.0, PaymentTiming::Begin).unwrap();
        assert_relative_eq!(begin, end * 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_inverts_present_value() {
        for timing in [PaymentTiming::End, PaymentTiming::Begin] {
            let pv = present_value_of_annuity(250.0, 0.01, 36.0, timing).unwrap();
            let pmt = payment_from_present_value(pv, 0.01, 36.0, timing).unwrap();
            assert_relative_eq!(pmt, 250.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(
            present_value_of_annuity(100.0, 0.05, 0.0, PaymentTiming::End).unwrap(),
            0.0
        );
        assert_eq!(
            payment_from_present_value(0.0, 0.05, 12.0, PaymentTiming::End).unwrap(),
            0.0
        );
        assert_eq!(
            payment_from_present_value(1200.0, 0.0, 12.0, PaymentTiming::Begin).unwrap(),
            100.0
        );
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(present_value_of_annuity(-1.0, 0.05, 10.0, PaymentTiming::End).is_err());
        assert!(present_value_of_annuity(100.0, -1.0, 10.0, PaymentTiming::End).is_err());
        assert!(payment_from_present_value(100.0, 0.05, -1.0, PaymentTiming::End).is_err());
    }
}
