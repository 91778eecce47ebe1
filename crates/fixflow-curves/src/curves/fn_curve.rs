//! Closure-backed curves.

use std::fmt;

use crate::error::{CurveError, CurveResult};
use crate::traits::ZeroCurve;

/// Adapts a closure `t -> rate` into a [`ZeroCurve`].
///
/// Useful for stress scenarios and analytic curve shapes. A non-finite rate
/// from the closure is reported as [`CurveError::InvalidValue`].
///
/// # Example
///
/// ```rust
/// use fixflow_curves::{FnCurve, ZeroCurve};
///
/// // Upward sloping: 2% plus 10bp per year
/// let curve = FnCurve::new(|t| 0.02 + 0.001 * t);
/// assert!((curve.zero_rate(5.0).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Clone, Copy)]
pub struct FnCurve<F> {
    f: F,
}

impl<F> FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ZeroCurve for FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let rate = (self.f)(t);
        if rate.is_finite() {
            Ok(rate)
        } else {
            Err(CurveError::invalid_value(format!(
                "zero rate at t={t} is {rate}"
            )))
        }
    }
}

impl<F> fmt::Debug for FnCurve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCurve").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closure_curve() {
        let curve = FnCurve::new(|t: f64| 0.03 + 0.002 * t.sqrt());

        assert_relative_eq!(curve.zero_rate(4.0).unwrap(), 0.034, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_rate_is_error() {
        let curve = FnCurve::new(|t: f64| 1.0 / (t - 1.0));

        assert!(curve.zero_rate(1.0).is_err());
        assert!(curve.discount_factor(1.0, 2).is_err());
    }

    #[test]
    fn test_debug() {
        let curve = FnCurve::new(|_| 0.01);
        assert_eq!(format!("{curve:?}"), "FnCurve { .. }");
    }
}
