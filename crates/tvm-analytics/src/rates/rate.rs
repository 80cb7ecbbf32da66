//! Excel RATE.
//!
//! Finds the periodic rate `r` for which a present value and a level payment
//! stream accumulate to the requested future value:
//! ```text
//! FV(r; n, pmt, pv, type) - fv = 0
//! ```

use serde::{Deserialize, Serialize};
use tvm_core::types::PaymentTiming;
use tvm_core::validation::{finite, positive};
use tvm_math::solvers::{Residual, Resolution};

use super::solve_rate;
use crate::config::RateSolverConfig;
use crate::error::AnalyticsResult;
use crate::tvm::future_value_of_flows;

/// Inputs of an annuity balance equation, in Excel's sign convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityTerms {
    /// Number of periods (`nper`).
    pub periods: f64,
    /// Payment per period (`pmt`).
    pub payment: f64,
    /// Present value (`pv`).
    pub present_value: f64,
    /// Target future value (`fv`).
    #[serde(default)]
    pub future_value: f64,
    /// Payment timing (`type`).
    #[serde(default)]
    pub timing: PaymentTiming,
}

impl AnnuityTerms {
    /// Creates terms with a zero future value and end-of-period payments.
    #[must_use]
    pub fn new(periods: f64, payment: f64, present_value: f64) -> Self {
        Self {
            periods,
            payment,
            present_value,
            future_value: 0.0,
            timing: PaymentTiming::End,
        }
    }

    /// Sets the target future value.
    #[must_use]
    pub fn with_future_value(mut self, future_value: f64) -> Self {
        self.future_value = future_value;
        self
    }

    /// Sets the payment timing.
    #[must_use]
    pub fn with_timing(mut self, timing: PaymentTiming) -> Self {
        self.timing = timing;
        self
    }

    fn validate(&self) -> AnalyticsResult<()> {
        positive(self.periods, "periods")?;
        finite(self.payment, "payment")?;
        finite(self.present_value, "present_value")?;
        finite(self.future_value, "future_value")?;
        Ok(())
    }
}

/// Balance equation of an annuity, `FV(r) - future_value`.
///
/// The derivative is a central finite difference whose step scales with
/// `|r|`, which stays well-conditioned near zero and at large rates.
#[derive(Debug, Clone, Copy)]
pub struct AnnuityEquation {
    terms: AnnuityTerms,
}

impl AnnuityEquation {
    /// Wraps annuity terms.
    #[must_use]
    pub fn new(terms: AnnuityTerms) -> Self {
        Self { terms }
    }
}

impl Residual for AnnuityEquation {
    fn value(&self, rate: f64) -> f64 {
        let t = &self.terms;
        future_value_of_flows(rate, t.periods, t.payment, t.present_value, t.timing)
            - t.future_value
    }
}

/// Excel RATE solver.
///
/// Defaults: guess 10%, domain (-0.999999999, 10), tolerance 1e-10,
/// 100 iterations.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::rates::{AnnuityTerms, RateSolver};
///
/// // 12 payments of 88.85 repay 1000: 1% per period
/// let terms = AnnuityTerms::new(12.0, -88.848_788_678_341_66, 1000.0);
/// let r = RateSolver::new().with_guess(0.02).solve(&terms).unwrap();
/// assert!((r - 0.01).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSolver {
    config: RateSolverConfig,
}

impl Default for RateSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSolver {
    /// Creates a solver with Excel RATE defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RateSolverConfig::excel_rate(),
        }
    }

    /// Creates a solver from an explicit configuration.
    #[must_use]
    pub fn with_config(config: RateSolverConfig) -> Self {
        Self { config }
    }

    /// Sets the starting guess.
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.config.guess = guess;
        self
    }

    /// Sets the search domain.
    #[must_use]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.config = self.config.with_bounds(lower_bound, upper_bound);
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RateSolverConfig {
        &self.config
    }

    /// Solves for the periodic rate.
    ///
    /// # Errors
    ///
    /// Rejects `periods <= 0`, non-finite amounts, and an invalid
    /// configuration before iterating. Returns
    /// [`AnalyticsError::SolverConvergenceFailed`](crate::AnalyticsError::SolverConvergenceFailed)
    /// when no stage finds a root.
    pub fn solve(&self, terms: &AnnuityTerms) -> AnalyticsResult<f64> {
        self.solve_with_diagnostics(terms).map(|r| r.root)
    }

    /// Like [`solve`](Self::solve) but reports the stage that converged.
    pub fn solve_with_diagnostics(&self, terms: &AnnuityTerms) -> AnalyticsResult<Resolution> {
        terms.validate()?;
        let bounds = self.config.validate()?;

        solve_rate(
            "RATE",
            &AnnuityEquation::new(*terms),
            self.config.guess,
            bounds,
            &self.config.escalation(),
        )
    }
}

/// Excel `RATE(nper, pmt, pv)` with default settings.
pub fn rate(periods: f64, payment: f64, present_value: f64) -> AnalyticsResult<f64> {
    RateSolver::new().solve(&AnnuityTerms::new(periods, payment, present_value))
}
