//! Rate needed to grow savings to a target.
//!
//! Without contributions the rate has a closed form. With periodic
//! contributions the balance equation
//! ```text
//! P·(1 + r)^n + C·((1 + r)^n - 1)/r·due(r) - target = 0
//! ```
//! goes through the same escalation pipeline as IRR and RATE.

use log::debug;
use serde::{Deserialize, Serialize};
use tvm_core::types::PaymentTiming;
use tvm_core::validation::{non_negative, positive};
use tvm_math::solvers::Residual;

use super::solve_rate;
use crate::config::{RateSolverConfig, IRR_LOWER_BOUND};
use crate::error::AnalyticsResult;
use crate::tvm::future_value_of_flows;

/// A savings goal: grow `principal` plus contributions to a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Amount invested now.
    pub principal: f64,
    /// Balance to reach after `periods`.
    pub target_future_value: f64,
    /// Number of compounding periods.
    pub periods: f64,
    /// Amount added every period.
    #[serde(default)]
    pub contribution_per_period: f64,
    /// When contributions are made within a period.
    #[serde(default)]
    pub contribution_timing: PaymentTiming,
}

impl SavingsGoal {
    /// Creates a lump-sum goal with no contributions.
    #[must_use]
    pub fn new(principal: f64, target_future_value: f64, periods: f64) -> Self {
        Self {
            principal,
            target_future_value,
            periods,
            contribution_per_period: 0.0,
            contribution_timing: PaymentTiming::End,
        }
    }

    /// Adds a periodic contribution.
    #[must_use]
    pub fn with_contribution(mut self, amount: f64, timing: PaymentTiming) -> Self {
        self.contribution_per_period = amount;
        self.contribution_timing = timing;
        self
    }

    /// Balance after `periods` at the per-period `rate`.
    #[must_use]
    pub fn future_value_at(&self, rate: f64) -> f64 {
        -future_value_of_flows(
            rate,
            self.periods,
            self.contribution_per_period,
            self.principal,
            self.contribution_timing,
        )
    }

    fn validate(&self) -> AnalyticsResult<()> {
        non_negative(self.principal, "principal")?;
        non_negative(self.target_future_value, "target_future_value")?;
        positive(self.periods, "periods")?;
        non_negative(self.contribution_per_period, "contribution_per_period")?;
        Ok(())
    }

    /// Zero-contribution closed form used as the starting point, kept above
    /// the search floor.
    fn initial_guess(&self) -> f64 {
        let invested = self.principal + self.contribution_per_period * self.periods;
        let guess = (self.target_future_value / invested).powf(1.0 / self.periods) - 1.0;
        if guess.is_finite() {
            guess.max(IRR_LOWER_BOUND)
        } else {
            IRR_LOWER_BOUND
        }
    }
}

/// Residual `FV(r) - target` of a [`SavingsGoal`].
#[derive(Debug, Clone, Copy)]
pub struct GoalEquation {
    goal: SavingsGoal,
}

impl GoalEquation {
    /// Wraps a goal.
    #[must_use]
    pub fn new(goal: SavingsGoal) -> Self {
        Self { goal }
    }
}

impl Residual for GoalEquation {
    fn value(&self, rate: f64) -> f64 {
        self.goal.future_value_at(rate) - self.goal.target_future_value
    }
}

/// Rate per period needed to reach the goal.
///
/// A goal already met without contributions needs a rate of exactly 0. A
/// lump-sum goal starting from nothing cannot be reached at any rate.
///
/// # Errors
///
/// Rejects a negative principal, target or contribution and non-positive
/// periods. Returns
/// [`AnalyticsError::SolverConvergenceFailed`](crate::AnalyticsError::SolverConvergenceFailed)
/// when no rate in (-0.99, 10) reaches the target.
///
/// # Example
///
/// ```rust
/// use tvm_analytics::rates::{solve_goal_rate, SavingsGoal};
///
/// let r = solve_goal_rate(&SavingsGoal::new(1000.0, 1500.0, 24.0)).unwrap();
/// assert!((1000.0 * (1.0 + r).powi(24) - 1500.0).abs() < 1e-8);
/// ```
pub fn solve_goal_rate(goal: &SavingsGoal) -> AnalyticsResult<f64> {
    goal.validate()?;

    if goal.contribution_per_period == 0.0 {
        return Ok(lump_sum_rate(goal));
    }

    let config = RateSolverConfig::irr().with_guess(goal.initial_guess());
    let bounds = config.validate()?;
    let resolution = solve_rate(
        "goal rate",
        &GoalEquation::new(*goal),
        config.guess,
        bounds,
        &config.escalation(),
    )?;
    Ok(resolution.root)
}

fn lump_sum_rate(goal: &SavingsGoal) -> f64 {
    if goal.target_future_value <= goal.principal {
        0.0
    } else if goal.principal == 0.0 {
        f64::NAN
    } else {
        (goal.target_future_value / goal.principal).powf(1.0 / goal.periods) - 1.0
    }
}

/// Like [`solve_goal_rate`] but reports an unreachable goal as `NaN`.
///
/// # Errors
///
/// Only precondition violations are raised.
pub fn rate_to_reach_goal(goal: &SavingsGoal) -> AnalyticsResult<f64> {
    match solve_goal_rate(goal) {
        Err(e) if e.is_convergence_failure() => {
            debug!("goal of {} unreachable: {e}", goal.target_future_value);
            Ok(f64::NAN)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_closed_form() {
        let r = rate_to_reach_goal(&SavingsGoal::new(1000.0, 1500.0, 24.0)).unwrap();
        assert_relative_eq!(1000.0 * (1.0 + r).powi(24), 1500.0, epsilon = 1e-8);
    }

    #[test]
    fn test_goal_already_met() {
        assert_eq!(
            rate_to_reach_goal(&SavingsGoal::new(2000.0, 1500.0, 12.0)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_lump_sum_from_nothing_is_unreachable() {
        assert!(rate_to_reach_goal(&SavingsGoal::new(0.0, 1500.0, 12.0))
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_with_contributions() {
        let goal = SavingsGoal::new(1000.0, 2500.0, 12.0).with_contribution(100.0, PaymentTiming::End);

        let r = rate_to_reach_goal(&goal).unwrap();

        assert!(r > 0.0);
        assert_relative_eq!(goal.future_value_at(r), 2500.0, epsilon = 1e-8);
    }

    #[test]
    fn test_contributions_at_period_start_need_lower_rate() {
        let end = SavingsGoal::new(1000.0, 2500.0, 12.0).with_contribution(100.0, PaymentTiming::End);
        let begin = end.with_contribution(100.0, PaymentTiming::Begin);

        let r_end = solve_goal_rate(&end).unwrap();
        let r_begin = solve_goal_rate(&begin).unwrap();

        assert!(r_begin < r_end);
    }

    #[test]
    fn test_negative_rate_goal() {
        // Contributing 1200 to end with 1000 requires losing money
        let goal = SavingsGoal::new(0.0, 1000.0, 12.0).with_contribution(100.0, PaymentTiming::End);
        let r = solve_goal_rate(&goal).unwrap();

        assert!(r < 0.0);
        assert_relative_eq!(goal.future_value_at(r), 1000.0, epsilon = 1e-8);
    }

    #[test]
    fn test_unreachable_goal_is_nan() {
        // Even at -99% the contributions alone exceed the target
        let goal = SavingsGoal::new(0.0, 50.0, 12.0).with_contribution(100.0, PaymentTiming::End);

        assert!(rate_to_reach_goal(&goal).unwrap().is_nan());
        assert!(solve_goal_rate(&goal).unwrap_err().is_convergence_failure());
    }

    #[test]
    fn test_rejects_invalid_goal() {
        assert!(rate_to_reach_goal(&SavingsGoal::new(-1.0, 1500.0, 12.0)).is_err());
        assert!(rate_to_reach_goal(&SavingsGoal::new(1000.0, -1.0, 12.0)).is_err());
        assert!(rate_to_reach_goal(&SavingsGoal::new(1000.0, 1500.0, 0.0)).is_err());
        let negative_contribution =
            SavingsGoal::new(1000.0, 1500.0, 12.0).with_contribution(-10.0, PaymentTiming::End);
        assert!(rate_to_reach_goal(&negative_contribution).is_err());
    }
}
