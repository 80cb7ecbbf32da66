//! Rate solvers.
//!
//! Interest rates that cannot be isolated algebraically:
//!
//! - [`irr`]: internal rate of return of a cash-flow series
//! - [`rate`]: Excel RATE, the periodic rate implied by an annuity
//! - [`rate_to_reach_goal`]: rate needed to grow savings to a target
//!
//! Each builds an immutable equation record, validates its inputs, and hands
//! the equation to the same escalation pipeline
//! ([`tvm_math::solvers::solve_escalating`]): Newton-Raphson inside the search
//! domain, then bracket search plus bisection, else failure.

mod goal;
mod irr;
mod rate;

#[cfg(feature = "parallel")]
mod batch;

pub use goal::{rate_to_reach_goal, solve_goal_rate, GoalEquation, SavingsGoal};
pub use irr::{irr, IrrSolver};
pub use rate::{rate, AnnuityEquation, AnnuityTerms, RateSolver};

#[cfg(feature = "parallel")]
pub use batch::irr_batch;

use tvm_core::types::RateBounds;
use tvm_math::solvers::{solve_escalating, EscalationConfig, Residual, Resolution};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Runs the escalation pipeline and maps exhaustion to the
/// "did not converge" error for `solver`.
fn solve_rate<R: Residual>(
    solver: &str,
    residual: &R,
    guess: f64,
    bounds: RateBounds,
    config: &EscalationConfig,
) -> AnalyticsResult<Resolution> {
    solve_escalating(residual, guess, bounds.as_tuple(), config).map_err(|e| {
        AnalyticsError::SolverConvergenceFailed {
            solver: solver.to_string(),
            iterations: config.solver.max_iterations,
            reason: e.to_string(),
        }
    })
}
