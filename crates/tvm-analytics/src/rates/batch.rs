//! Parallel IRR over many independent cash-flow series.

use rayon::prelude::*;

use super::IrrSolver;
use crate::config::RateSolverConfig;
use crate::error::AnalyticsResult;

/// Solves the IRR of each series on the rayon thread pool.
///
/// Results keep the input order; one failing series does not affect the
/// others.
pub fn irr_batch(series: &[Vec<f64>], config: &RateSolverConfig) -> Vec<AnalyticsResult<f64>> {
    let solver = IrrSolver::with_config(*config);
    series
        .par_iter()
        .map(|cash_flows| solver.solve(cash_flows))
        .collect()
}
