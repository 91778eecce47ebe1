//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The only success exit is a residual `|f(x)| < tolerance`. When `domain`
/// is given, an iterate outside the open interval `(lower, upper)` stops the
/// iteration with [`MathError::DomainExit`].
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `domain` - Optional open interval the iterates must stay inside
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] for a zero or non-finite derivative
/// - [`MathError::DomainExit`] when an iterate leaves `domain`
/// - [`MathError::ConvergenceFailed`] after `max_iterations` steps
///
/// # Example
///
/// ```rust
/// use fixflow_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, None, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    domain: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        // Check for convergence
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        if dfx == 0.0 || !dfx.is_finite() {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        x -= fx / dfx;

        // NaN fails the containment test too
        if let Some((lower, upper)) = domain {
            if !(x > lower && x < upper) {
                return Err(MathError::DomainExit {
                    value: x,
                    lower,
                    upper,
                    iterations: iteration + 1,
                });
            }
        } else if !x.is_finite() {
            return Err(MathError::invalid_input("Newton produced non-finite value"));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10); // Should converge quickly
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_derivative_error() {
        // f'(0) = 0 for x^3 - 1
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, None, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_domain_exit() {
        // From x = 0.1 the first step on x^2 - 2 jumps to ~10.05
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 0.1, Some((0.0, 5.0)), &SolverConfig::default());

        match result {
            Err(MathError::DomainExit {
                value, iterations, ..
            }) => {
                assert!(value > 5.0);
                assert_eq!(iterations, 1);
            }
            other => panic!("Expected DomainExit, got {other:?}"),
        }
    }

    #[test]
    fn test_iterations_exhausted() {
        // Tight tolerance, two steps only
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let config = SolverConfig::new(1e-15, 2);

        let result = newton_raphson(f, df, 100.0, None, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 2, .. })
        ));
    }
}
