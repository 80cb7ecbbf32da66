//! Periodic cash-flow series.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An ordered series of signed amounts, one per period, starting at period 0
/// ("now").
///
/// Construction guarantees the series is non-empty and every amount is
/// finite. Positive amounts are inflows, negative amounts outflows.
///
/// # Example
///
/// ```rust
/// use tvm_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-1000.0, 300.0, 400.0, 500.0]).unwrap();
/// assert!(series.has_sign_change());
/// assert_eq!(series.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSeries {
    amounts: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a validated series.
    pub fn new(amounts: Vec<f64>) -> CoreResult<Self> {
        if amounts.is_empty() {
            return Err(CoreError::invalid_input("cash_flows", "non-empty"));
        }
        if let Some(t) = amounts.iter().position(|cf| !cf.is_finite()) {
            return Err(CoreError::invalid_input(
                format!("cash_flows[{t}]"),
                "a finite number",
            ));
        }
        Ok(Self { amounts })
    }

    /// Creates a validated series from a slice.
    pub fn from_slice(amounts: &[f64]) -> CoreResult<Self> {
        Self::new(amounts.to_vec())
    }

    /// The amounts, indexed by period.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.amounts
    }

    /// Number of periods, including period 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false for a constructed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// `(period, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.amounts.iter().copied().enumerate()
    }

    /// Returns true if any amount is strictly positive.
    #[must_use]
    pub fn has_inflow(&self) -> bool {
        self.amounts.iter().any(|&cf| cf > 0.0)
    }

    /// Returns true if any amount is strictly negative.
    #[must_use]
    pub fn has_outflow(&self) -> bool {
        self.amounts.iter().any(|&cf| cf < 0.0)
    }

    /// Returns true if the series mixes inflows and outflows.
    ///
    /// Only such a series can have a finite rate that zeroes its net present
    /// value.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.has_inflow() && self.has_outflow()
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = CoreError;

    fn try_from(amounts: Vec<f64>) -> CoreResult<Self> {
        Self::new(amounts)
    }
}

impl From<CashFlowSeries> for Vec<f64> {
    fn from(series: CashFlowSeries) -> Self {
        series.amounts
    }
}

impl AsRef<[f64]> for CashFlowSeries {
    fn as_ref(&self) -> &[f64] {
        &self.amounts
    }
}
