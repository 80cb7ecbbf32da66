//! Rate solver configuration.
//!
//! [`RateSolverConfig`] carries the tunables shared by the IRR and RATE
//! solvers. Missing fields fall back to defaults when deserializing, and
//! [`RateSolverConfig::validate`] reports every invalid field at once.

use serde::{Deserialize, Serialize};
use tvm_core::types::RateBounds;
use tvm_core::validation::{finite, positive, positive_iterations};
use tvm_math::solvers::{EscalationConfig, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Lower bound used by Excel-style RATE.
pub const EXCEL_RATE_LOWER_BOUND: f64 = -0.999_999_999;

/// Lower bound used by IRR.
pub const IRR_LOWER_BOUND: f64 = -0.99;

/// Upper bound shared by IRR and RATE.
pub const DEFAULT_UPPER_BOUND: f64 = 10.0;

/// Default starting guess.
pub const DEFAULT_GUESS: f64 = 0.1;

/// Tunables for a rate solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSolverConfig {
    /// Newton starting point.
    #[serde(default = "default_guess")]
    pub guess: f64,

    /// Residual tolerance (also the bisection width tolerance).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Newton iteration budget. Bisection gets twice as many.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Lower end of the search domain, must be > -1.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,

    /// Upper end of the search domain.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
}

fn default_guess() -> f64 {
    DEFAULT_GUESS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_lower_bound() -> f64 {
    IRR_LOWER_BOUND
}

fn default_upper_bound() -> f64 {
    DEFAULT_UPPER_BOUND
}

impl Default for RateSolverConfig {
    fn default() -> Self {
        Self::irr()
    }
}

impl RateSolverConfig {
    /// IRR defaults: guess 10%, domain (-0.99, 10).
    #[must_use]
    pub fn irr() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            lower_bound: IRR_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    /// Excel RATE defaults: guess 10%, domain (-0.999999999, 10).
    #[must_use]
    pub fn excel_rate() -> Self {
        Self {
            lower_bound: EXCEL_RATE_LOWER_BOUND,
            ..Self::irr()
        }
    }

    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        serde_json::from_str(json).map_err(|e| AnalyticsError::InvalidConfig(e.to_string()))
    }

    /// Sets the starting guess.
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the search domain.
    #[must_use]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Lists every invalid field.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.guess.is_finite() {
            errors.push("guess must be a finite number".to_string());
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            errors.push("tolerance must be > 0".to_string());
        }
        if let Err(e) = RateBounds::new(self.lower_bound, self.upper_bound) {
            errors.push(e.to_string());
        }
        if self.max_iterations == 0 {
            errors.push("max_iterations must be a positive integer".to_string());
        }

        errors
    }

    /// Validates the configuration and returns the checked search domain.
    ///
    /// Bounds are checked before the iteration budget, so the first reported
    /// problem for a config with several is the domain.
    pub fn validate(&self) -> AnalyticsResult<RateBounds> {
        let bounds = RateBounds::new(self.lower_bound, self.upper_bound)?;
        positive_iterations(self.max_iterations, "max_iterations")?;
        finite(self.guess, "guess")?;
        positive(self.tolerance, "tolerance")?;
        Ok(bounds)
    }

    /// The escalation settings derived from this configuration.
    #[must_use]
    pub fn escalation(&self) -> EscalationConfig {
        EscalationConfig::new(SolverConfig::new(self.tolerance, self.max_iterations))
    }
}
