//! Net present value of a periodic cash-flow series.

use tvm_core::types::CashFlowSeries;
use tvm_core::validation::rate_above_floor;
use tvm_math::solvers::Residual;

use crate::error::AnalyticsResult;

/// NPV as a function of the discount rate.
///
/// `f(r) = Σ cf[t] / (1 + r)^t` and `f'(r) = -Σ t·cf[t] / (1 + r)^(t + 1)`.
/// This is the residual whose root is the internal rate of return.
#[derive(Debug, Clone, Copy)]
pub struct NpvEquation<'a> {
    cash_flows: &'a [f64],
}

impl<'a> NpvEquation<'a> {
    /// Wraps a cash-flow series, period 0 first.
    #[must_use]
    pub fn new(cash_flows: &'a [f64]) -> Self {
        Self { cash_flows }
    }
}

impl Residual for NpvEquation<'_> {
    fn value(&self, rate: f64) -> f64 {
        let base = 1.0 + rate;
        self.cash_flows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf / base.powi(t as i32))
            .sum()
    }

    fn derivative(&self, rate: f64) -> f64 {
        let base = 1.0 + rate;
        self.cash_flows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(t, &cf)| -(t as f64) * cf / base.powi(t as i32 + 1))
            .sum()
    }
}

/// Net present value at `rate`, with `cash_flows[0]` undiscounted.
///
/// An empty series is worth zero.
///
/// # Errors
///
/// Rejects `rate <= -1` and non-finite amounts.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::tvm::npv;
///
/// let value = npv(0.10, &[-1000.0, 1100.0]).unwrap();
/// assert!(value.abs() < 1e-9);
/// ```
pub fn npv(rate: f64, cash_flows: &[f64]) -> AnalyticsResult<f64> {
    rate_above_floor(rate, "rate")?;
    if cash_flows.is_empty() {
        return Ok(0.0);
    }
    let series = CashFlowSeries::from_slice(cash_flows)?;
    Ok(NpvEquation::new(series.as_slice()).value(rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_manual_discounting() {
        let flows = [-1000.0, 400.0, 500.0, 300.0];
        let manual = -1000.0 + 400.0 / 1.1 + 500.0 / 1.1_f64.powi(2) + 300.0 / 1.1_f64.powi(3);

        assert_relative_eq!(npv(0.1, &flows).unwrap(), manual, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_is_zero() {
        assert_eq!(npv(0.05, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_rate_floor() {
        assert!(npv(-1.0, &[1.0]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_flow() {
        let err = npv(0.05, &[-1.0, f64::INFINITY]).unwrap_err();
        assert!(err.to_string().contains("cash_flows[1]"));
    }

    #[test]
    fn test_analytic_derivative_matches_finite_difference() {
        let flows = [-1000.0, 300.0, 400.0, 500.0];
        let eq = NpvEquation::new(&flows);
        let h = 1e-6;
        let numeric = (eq.value(0.08 + h) - eq.value(0.08 - h)) / (2.0 * h);

        assert_relative_eq!(eq.derivative(0.08), numeric, epsilon = 1e-4);
    }
}
