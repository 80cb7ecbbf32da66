//! Internal rate of return.
//!
//! The IRR is the discount rate at which the net present value of a
//! cash-flow series is zero:
//! ```text
//! Σ CF_t / (1 + r)^t = 0
//! ```

use log::debug;
use tvm_core::types::CashFlowSeries;
use tvm_math::solvers::Resolution;

use super::solve_rate;
use crate::config::RateSolverConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::tvm::NpvEquation;

/// IRR solver.
///
/// Defaults: guess 10%, domain (-0.99, 10), tolerance 1e-10, 100 iterations.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::rates::IrrSolver;
///
/// // Bounds miss the true root at 10%; the bracket search recovers it.
/// let r = IrrSolver::new()
///     .with_guess(0.3)
///     .with_bounds(0.2, 0.5)
///     .solve(&[-1000.0, 1100.0])
///     .unwrap();
/// assert!((r - 0.10).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrSolver {
    config: RateSolverConfig,
}

impl Default for IrrSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IrrSolver {
    /// Creates a solver with IRR defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RateSolverConfig::irr(),
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

    /// Solves for the IRR of `cash_flows` (period 0 first).
    ///
    /// # Errors
    ///
    /// Precondition violations, checked in this order before any iteration:
    /// empty series, non-finite entry, `lower_bound <= -1`,
    /// `upper_bound <= lower_bound`, zero iteration budget, and a series
    /// without both a positive and a negative amount. If no stage converges,
    /// [`AnalyticsError::SolverConvergenceFailed`].
    pub fn solve(&self, cash_flows: &[f64]) -> AnalyticsResult<f64> {
        self.solve_with_diagnostics(cash_flows).map(|r| r.root)
    }

    /// Like [`solve`](Self::solve) but reports the stage that converged.
    pub fn solve_with_diagnostics(&self, cash_flows: &[f64]) -> AnalyticsResult<Resolution> {
        let series = CashFlowSeries::from_slice(cash_flows)?;
        self.solve_series(&series)
    }

    /// Solves for the IRR of an already-validated series.
    pub fn solve_series(&self, series: &CashFlowSeries) -> AnalyticsResult<Resolution> {
        let bounds = self.config.validate()?;
        if !series.has_sign_change() {
            return Err(AnalyticsError::InvalidInput(
                "cash_flows must contain at least one positive and one negative amount"
                    .to_string(),
            ));
        }

        let equation = NpvEquation::new(series.as_slice());
        let resolution = solve_rate(
            "IRR",
            &equation,
            self.config.guess,
            bounds,
            &self.config.escalation(),
        )?;
        debug!(
            "IRR {} via {} over {} periods",
            resolution.root,
            resolution.stage,
            series.len()
        );
        Ok(resolution)
    }
}

/// IRR with default settings.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::rates::irr;
///
/// let r = irr(&[-1000.0, 300.0, 400.0, 500.0]).unwrap();
/// let npv = -1000.0 + 300.0 / (1.0 + r) + 400.0 / (1.0 + r).powi(2) + 500.0 / (1.0 + r).powi(3);
/// assert!(npv.abs() < 1e-8);
/// ```
pub fn irr(cash_flows: &[f64]) -> AnalyticsResult<f64> {
    IrrSolver::new().solve(cash_flows)
}
