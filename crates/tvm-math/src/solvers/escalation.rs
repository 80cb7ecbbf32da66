//! Escalating root finder.
//!
//! Runs an ordered list of solver stages against a [`Residual`] and returns the
//! first success:
//!
//! 1. [`Stage::Newton`]: Newton-Raphson clamped to the search domain
//! 2. [`Stage::BracketedBisection`]: bracket search from the domain, then
//!    bisection with twice the iteration budget
//!
//! Every rate solver in the library goes through this pipeline so they all
//! converge (or fail) the same way.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::solvers::{
    bisection, find_bracket, newton_raphson, BracketConfig, Residual, SolverConfig, SolverResult,
};

/// A single attempt in the escalation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Newton-Raphson within the search domain.
    Newton,
    /// Bracket search followed by bisection.
    BracketedBisection,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Newton => "Newton-Raphson",
            Stage::BracketedBisection => "Bracket + Bisection",
        };
        write!(f, "{name}")
    }
}

/// Order in which [`solve_escalating`] tries the stages.
pub const ESCALATION_ORDER: [Stage; 2] = [Stage::Newton, Stage::BracketedBisection];

/// Configuration for [`solve_escalating`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EscalationConfig {
    /// Tolerance and iteration budget. Bisection gets twice the budget.
    #[serde(default)]
    pub solver: SolverConfig,
    /// Bracket search settings.
    #[serde(default)]
    pub bracket: BracketConfig,
}

impl EscalationConfig {
    /// Creates a configuration from a solver configuration with default
    /// bracket search.
    #[must_use]
    pub fn new(solver: SolverConfig) -> Self {
        Self {
            solver,
            bracket: BracketConfig::default(),
        }
    }

    /// Sets the bracket search configuration.
    #[must_use]
    pub fn with_bracket(mut self, bracket: BracketConfig) -> Self {
        self.bracket = bracket;
        self
    }
}

/// A root together with the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The root found.
    pub root: f64,
    /// Iterations used by the successful stage.
    pub iterations: u32,
    /// Residual at the root.
    pub residual: f64,
    /// The stage that converged.
    pub stage: Stage,
}

impl Resolution {
    fn from_result(result: SolverResult, stage: Stage) -> Self {
        Self {
            root: result.root,
            iterations: result.iterations,
            residual: result.residual,
            stage,
        }
    }
}

fn attempt<R: Residual>(
    stage: Stage,
    residual: &R,
    guess: f64,
    domain: (f64, f64),
    config: &EscalationConfig,
) -> MathResult<SolverResult> {
    let f = |x: f64| residual.value(x);
    match stage {
        Stage::Newton => newton_raphson(f, |x| residual.derivative(x), guess, domain, &config.solver),
        Stage::BracketedBisection => {
            let bracket = find_bracket(f, domain.0, domain.1, &config.bracket)?;
            if bracket.is_degenerate() {
                return Ok(SolverResult {
                    root: bracket.lower,
                    iterations: 0,
                    residual: f(bracket.lower),
                });
            }
            let bisection_config = config
                .solver
                .with_max_iterations(config.solver.max_iterations.saturating_mul(2));
            bisection(f, bracket.lower, bracket.upper, &bisection_config)
        }
    }
}

/// Finds a root of `residual` by escalating through [`ESCALATION_ORDER`].
///
/// # Arguments
///
/// * `residual` - The equation to solve
/// * `guess` - Newton starting point (clamped into `domain`)
/// * `domain` - `(min, max)` Newton domain and initial bracket search interval
/// * `config` - Solver and bracket configuration
///
/// # Errors
///
/// [`MathError::Exhausted`] if every stage fails. The individual failures are
/// logged at debug level.
pub fn solve_escalating<R: Residual>(
    residual: &R,
    guess: f64,
    domain: (f64, f64),
    config: &EscalationConfig,
) -> MathResult<Resolution> {
    for stage in ESCALATION_ORDER {
        match attempt(stage, residual, guess, domain, config) {
            Ok(result) => {
                debug!(
                    "{stage} converged to {} in {} iterations",
                    result.root, result.iterations
                );
                return Ok(Resolution::from_result(result, stage));
            }
            Err(e) => debug!("{stage} failed: {e}"),
        }
    }

    let stages = ESCALATION_ORDER
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(MathError::Exhausted { stages })
}
