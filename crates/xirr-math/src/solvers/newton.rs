//! Newton-Raphson root-finding algorithm.

use crate::numeric::Real;
use crate::solvers::{SolverConfig, SolverOutcome};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` starting from
/// `config.guess`, and stops once `|x_{n+1} - x_n| <= config.tolerance`.
///
/// `f` and `df` may return either `T` or `Option<T>`. A `None` from either,
/// or a step that cannot be represented, ends the solve with
/// [`SolverOutcome::NonFinite`]. An exactly zero derivative ends it with
/// [`SolverOutcome::DerivativeZero`].
///
/// # Example
///
/// ```rust
/// use xirr_math::solvers::{newton_raphson, SolverConfig};
///
/// let config = SolverConfig::new(0.5, 0.001, 10);
/// let outcome = newton_raphson(|x: f64| x - 2.0, |_: f64| 1.0, &config);
/// assert_eq!(outcome.root(), Some(2.0));
/// ```
pub fn newton_raphson<T, F, DF, V, DV>(f: F, df: DF, config: &SolverConfig<T>) -> SolverOutcome<T>
where
    T: Real,
    F: Fn(T) -> V,
    DF: Fn(T) -> DV,
    V: Into<Option<T>>,
    DV: Into<Option<T>>,
{
    let mut x0 = config.guess;
    let mut error = T::UNBOUNDED;
    let mut iteration = 0;

    while error > config.tolerance && iteration < config.max_iterations {
        iteration += 1;

        let (Some(fx), Some(dfx)) = (f(x0).into(), df(x0).into()) else {
            return SolverOutcome::NonFinite { x: x0, iteration };
        };

        if dfx.is_zero() {
            return SolverOutcome::DerivativeZero { x: x0, iteration };
        }

        let Some(x1) = fx.checked_div(dfx).and_then(|step| x0.checked_sub(step)) else {
            return SolverOutcome::NonFinite { x: x0, iteration };
        };

        error = x1.checked_sub(x0).map_or(T::UNBOUNDED, Real::abs);
        x0 = x1;
    }

    if error <= config.tolerance {
        SolverOutcome::Converged {
            root: x0,
            iterations: iteration,
        }
    } else {
        SolverOutcome::IterationLimitExceeded {
            limit: config.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn config(guess: f64) -> SolverConfig<f64> {
        SolverConfig::new(guess, 0.001, 10)
    }

    #[test]
    fn test_linear() {
        let outcome = newton_raphson(|x: f64| x - 2.0, |_: f64| 1.0, &config(0.5));
        assert_eq!(
            outcome,
            SolverOutcome::Converged {
                root: 2.0,
                iterations: 2
            }
        );
    }

    #[test]
    fn test_quadratic_two_roots() {
        let f = |x: f64| x * x - 3.0 * x + 1.0;
        let df = |x: f64| 2.0 * x - 3.0;

        let low = newton_raphson(f, df, &config(0.5)).root().unwrap();
        assert_relative_eq!(low, 0.381966, epsilon = 1e-5);

        let high = newton_raphson(f, df, &config(2.5)).root().unwrap();
        assert_relative_eq!(high, 2.61803, epsilon = 1e-5);
    }

    #[test]
    fn test_derivative_zero() {
        let f = |x: f64| x * x - 3.0 * x + 1.0;
        let df = |x: f64| 2.0 * x - 3.0;

        let outcome = newton_raphson(f, df, &config(1.5));
        assert_eq!(
            outcome,
            SolverOutcome::DerivativeZero {
                x: 1.5,
                iteration: 1
            }
        );
    }

    #[test]
    fn test_no_real_roots() {
        let f = |x: f64| x * x - 3.0 * x + 4.0;
        let df = |x: f64| 2.0 * x - 3.0;

        let outcome = newton_raphson(f, df, &config(2.0));
        assert_eq!(outcome, SolverOutcome::IterationLimitExceeded { limit: 10 });
    }

    #[test]
    fn test_partial_function() {
        // sqrt is undefined left of zero
        let f = |x: f64| {
            let v = x.sqrt() - 2.0;
            v.is_finite().then_some(v)
        };
        let df = |x: f64| 0.5 / x.sqrt();

        let outcome = newton_raphson(f, df, &config(-1.0));
        assert_eq!(
            outcome,
            SolverOutcome::NonFinite {
                x: -1.0,
                iteration: 1
            }
        );

        let root = newton_raphson(f, df, &SolverConfig::new(1.0, 1e-10, 50))
            .root()
            .unwrap();
        assert_relative_eq!(root, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_decimal_linear() {
        let config = SolverConfig::new(dec!(0.5), dec!(0.001), 10);
        let outcome = newton_raphson(|x: Decimal| x - dec!(2), |_: Decimal| dec!(1), &config);
        assert_eq!(outcome.root(), Some(dec!(2)));
    }

    #[test]
    fn test_decimal_quadratic() {
        let config = SolverConfig::new(dec!(0.5), dec!(0.001), 10);
        let f = |x: Decimal| x * x - dec!(3) * x + dec!(1);
        let df = |x: Decimal| dec!(2) * x - dec!(3);

        let root = newton_raphson(f, df, &config).root().unwrap();
        assert_relative_eq!(root.as_float(), 0.381966, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let outcome = newton_raphson(|x: f64| x - 2.0, |_: f64| 1.0, &SolverConfig::new(0.5, 0.001, 0));
        assert_eq!(outcome, SolverOutcome::IterationLimitExceeded { limit: 0 });
    }

    proptest! {
        #[test]
        fn prop_linear_converges(a in 0.5f64..10.0, b in -10.0f64..10.0, guess in -5.0f64..5.0) {
            let outcome = newton_raphson(|x: f64| a * x + b, |_: f64| a, &SolverConfig::new(guess, 1e-9, 10));
            let root = outcome.root().unwrap();
            prop_assert!((root + b / a).abs() < 1e-9);
        }

        #[test]
        fn prop_deterministic(guess in -5.0f64..5.0) {
            let f = |x: f64| x * x - 3.0 * x + 1.0;
            let df = |x: f64| 2.0 * x - 3.0;
            let cfg = config(guess);
            prop_assert_eq!(newton_raphson(f, df, &cfg), newton_raphson(f, df, &cfg));
        }
    }
}
