//! Property tests for the root-finding primitives.

use proptest::prelude::*;
use tvm_math::solvers::{bisection, newton_raphson, SolverConfig};

proptest! {
    #[test]
    fn bisection_stays_inside_bracket(
        root in -0.9f64..5.0,
        lower_gap in 0.01f64..2.0,
        upper_gap in 0.01f64..2.0,
        iterations in 1u32..60,
    ) {
        let lower = root - lower_gap;
        let upper = root + upper_gap;
        let f = |x: f64| (x - root) * (1.0 + x * x);

        let result = bisection(f, lower, upper, &SolverConfig::new(1e-12, iterations)).unwrap();

        prop_assert!(result.root >= lower && result.root <= upper);
    }

    #[test]
    fn newton_stays_inside_domain(
        guess in -10.0f64..10.0,
        min in -0.99f64..0.0,
        width in 0.01f64..3.0,
        target in -5.0f64..5.0,
    ) {
        let max = min + width;
        let f = |x: f64| x * x * x - target;
        let df = |x: f64| 3.0 * x * x;

        if let Ok(result) = newton_raphson(f, df, guess, (min, max), &SolverConfig::default()) {
            prop_assert!(result.root >= min && result.root <= max);
        }
    }

    #[test]
    fn newton_converged_roots_meet_tolerance(target in 0.1f64..100.0, guess in 0.5f64..20.0) {
        let f = |x: f64| x * x - target;
        let df = |x: f64| 2.0 * x;
        let config = SolverConfig::new(1e-9, 200);

        let result = newton_raphson(f, df, guess, (0.0, 1e3), &config).unwrap();

        prop_assert!(f(result.root).abs() <= 1e-9);
    }
}
