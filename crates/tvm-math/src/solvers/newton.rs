//! Newton-Raphson root-finding algorithm.

use log::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MIN_DERIVATIVE};

/// Newton-Raphson root-finding algorithm with domain clamping.
///
/// Uses the iteration:
/// `x_{n+1} = clamp(x_n - f(x_n) / f'(x_n), min, max)`
///
/// The initial guess is clamped into `[min, max]` as well, so the returned
/// root always lies inside the domain.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `domain` - Inclusive `(min, max)` interval the iterate is kept in
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root as soon as `|f(x)| <= tolerance`. Otherwise an error:
///
/// - [`MathError::NonFinite`] if `f(x)` or `f'(x)` is NaN or infinite
/// - [`MathError::DivisionByZero`] if `|f'(x)| < 1e-14`
/// - [`MathError::ConvergenceFailed`] when the iteration budget runs out.
///   The last iterate is never returned as a root.
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, (0.0, 10.0), &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    domain: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (min, max) = domain;
    if min.is_nan() || max.is_nan() || min > max {
        return Err(MathError::invalid_input(format!(
            "Newton domain [{min}, {max}] is empty"
        )));
    }

    let mut x = initial_guess.clamp(min, max);
    let mut last_residual = f64::NAN;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { x });
        }

        // Check for convergence
        if fx.abs() <= config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { x });
        }

        // Stationary point
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        x = (x - fx / dfx).clamp(min, max);
        last_residual = fx;
        trace!("newton iteration {iteration}: x = {x}, f = {fx:e}");
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        last_residual.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WIDE: (f64, f64) = (f64::NEG_INFINITY, f64::INFINITY);

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, WIDE, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, WIDE, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, WIDE, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_non_finite_value() {
        let f = |x: f64| 1.0 / x - 1.0;
        let df = |x: f64| -1.0 / (x * x);

        let result = newton_raphson(f, df, 0.0, WIDE, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NonFinite { .. })));
    }

    #[test]
    fn test_guess_is_clamped_into_domain() {
        let f = |x: f64| x - 0.5;
        let df = |_x: f64| 1.0;

        let result = newton_raphson(f, df, 50.0, (0.0, 1.0), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_root_outside_domain_is_not_reported() {
        // Root at 0.1, domain pinned above it: the iterate sticks to 0.2
        let f = |r: f64| -1000.0 + 1100.0 / (1.0 + r);
        let df = |r: f64| -1100.0 / ((1.0 + r) * (1.0 + r));

        let result = newton_raphson(f, df, 0.3, (0.2, 0.5), &SolverConfig::default());

        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    #[test]
    fn test_exhausted_budget_returns_error() {
        let f = |x: f64| x.atan();
        let df = |x: f64| 1.0 / (1.0 + x * x);

        // Newton on atan diverges from |x0| > ~1.39
        let result = newton_raphson(f, df, 2.0, WIDE, &SolverConfig::new(1e-12, 5));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_domain() {
        let result = newton_raphson(|x| x, |_| 1.0, 0.0, (1.0, 0.0), &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
