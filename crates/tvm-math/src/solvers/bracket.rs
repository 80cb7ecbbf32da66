//! Bracket search.
//!
//! Recovers an interval with a sign change when Newton-Raphson fails or the
//! caller's bounds do not already straddle a root. The lower end contracts
//! geometrically toward a floor (rates are bounded below by -1) while the
//! upper end expands geometrically.

use log::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::BracketConfig;

/// An interval `[lower, upper]` whose endpoint values differ in sign.
///
/// A degenerate bracket (`lower == upper`) means the function is exactly zero
/// at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower end of the interval.
    pub lower: f64,
    /// Upper end of the interval.
    pub upper: f64,
}

impl Bracket {
    /// Creates a bracket from two endpoints.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// A zero-width bracket at an exact root.
    #[must_use]
    pub fn at(root: f64) -> Self {
        Self {
            lower: root,
            upper: root,
        }
    }

    /// Returns true if both ends coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn opposite(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a * b < 0.0)
}

/// Searches for an interval on which `f` changes sign.
///
/// Both supplied bounds are evaluated first: an exact zero yields a degenerate
/// bracket and opposite signs return the bounds unchanged. Otherwise, for up
/// to `config.max_rounds` rounds:
///
/// 1. the lower bound moves to `max(floor, (lower - 1) / 2)` and is tested
///    against the current upper bound,
/// 2. the upper bound moves to `upper * 2 + 1` and is tested against the
///    current lower bound.
///
/// Non-finite evaluations carry no information and are skipped: a lower
/// candidate with a non-finite value is not adopted, and an upper bound with
/// a non-finite value cannot complete a bracket until it moves again.
///
/// # Errors
///
/// [`MathError::BracketNotFound`] when no sign change appears within the
/// round budget.
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::{find_bracket, BracketConfig};
///
/// // Root at 0.1 lies below the supplied interval
/// let f = |r: f64| -1000.0 + 1100.0 / (1.0 + r);
/// let bracket = find_bracket(f, 0.2, 0.5, &BracketConfig::default()).unwrap();
///
/// assert!(f(bracket.lower) * f(bracket.upper) < 0.0);
/// ```
pub fn find_bracket<F>(f: F, lower: f64, upper: f64, config: &BracketConfig) -> MathResult<Bracket>
where
    F: Fn(f64) -> f64,
{
    let mut lower = lower;
    let mut upper = upper;
    let mut f_lower = finite(f(lower));
    let mut f_upper = finite(f(upper));

    if f_lower == Some(0.0) {
        return Ok(Bracket::at(lower));
    }
    if f_upper == Some(0.0) {
        return Ok(Bracket::at(upper));
    }
    if opposite(f_lower, f_upper) {
        return Ok(Bracket::new(lower, upper));
    }

    for round in 0..config.max_rounds {
        let next_lower = config.floor.max((lower - 1.0) / 2.0);
        let f_next = finite(f(next_lower));
        if f_next == Some(0.0) {
            return Ok(Bracket::at(next_lower));
        }
        if opposite(f_next, f_upper) {
            return Ok(Bracket::new(next_lower, upper));
        }
        if f_next.is_some() {
            lower = next_lower;
            f_lower = f_next;
        }

        upper = upper * 2.0 + 1.0;
        f_upper = finite(f(upper));
        if f_upper == Some(0.0) {
            return Ok(Bracket::at(upper));
        }
        if opposite(f_lower, f_upper) {
            return Ok(Bracket::new(lower, upper));
        }
        trace!("bracket round {round}: [{lower}, {upper}] without sign change");
    }

    Err(MathError::BracketNotFound {
        rounds: config.max_rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_already_bracket() {
        let f = |x: f64| x - 0.5;

        let bracket = find_bracket(f, 0.0, 1.0, &BracketConfig::default()).unwrap();

        assert_eq!(bracket, Bracket::new(0.0, 1.0));
    }

    #[test]
    fn test_zero_at_bound_is_degenerate() {
        let f = |x: f64| x - 1.0;

        let bracket = find_bracket(f, 0.5, 1.0, &BracketConfig::default()).unwrap();

        assert!(bracket.is_degenerate());
        assert_relative_eq!(bracket.lower, 1.0);
    }

    #[test]
    fn test_contracts_lower_bound() {
        let f = |r: f64| -1000.0 + 1100.0 / (1.0 + r);

        let bracket = find_bracket(f, 0.2, 0.5, &BracketConfig::default()).unwrap();

        // First contraction: (0.2 - 1) / 2 = -0.4
        assert_relative_eq!(bracket.lower, -0.4);
        assert_relative_eq!(bracket.upper, 0.5);
    }

    #[test]
    fn test_expands_upper_bound() {
        let f = |x: f64| x - 5.0;

        let bracket = find_bracket(f, 0.0, 1.0, &BracketConfig::default()).unwrap();

        // upper: 1 -> 3 -> 7
        assert_relative_eq!(bracket.upper, 7.0);
        assert!(f(bracket.lower) < 0.0);
    }

    #[test]
    fn test_lower_never_crosses_floor() {
        let f = |x: f64| x + 5.0;
        let config = BracketConfig::default();

        let result = find_bracket(f, 0.0, 1.0, &config);

        // Root at -5 is below the floor and can never be bracketed
        assert!(matches!(result, Err(MathError::BracketNotFound { rounds: 20 })));
    }

    #[test]
    fn test_root_beyond_expansion_budget() {
        let f = |r: f64| 1.0 + r - 1e8;

        let result = find_bracket(f, 0.0, 1.0, &BracketConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        // Undefined below zero, root at 4
        let f = |x: f64| if x < 0.0 { f64::NAN } else { x - 4.0 };

        let bracket = find_bracket(f, 0.5, 1.0, &BracketConfig::default()).unwrap();

        // Lower never moves off 0.5; upper: 1 -> 3 -> 7
        assert_relative_eq!(bracket.lower, 0.5);
        assert_relative_eq!(bracket.upper, 7.0);
    }
}
