//! Parallel-shifted curves.

use crate::error::CurveResult;
use crate::traits::ZeroCurve;

/// A curve wrapper that adds a constant spread to every zero rate.
///
/// `r_shifted(t) = r_base(t) + shift`
///
/// The base can be owned or borrowed (`ShiftedCurve::new(&curve, ..)`).
/// Used for curve DV01 and for stress scenarios.
///
/// # Example
///
/// ```rust
/// use fixflow_curves::{FlatCurve, ShiftedCurve, ZeroCurve};
///
/// let base = FlatCurve::new(0.04);
/// let up = ShiftedCurve::new(&base, 0.0001);
/// assert!((up.zero_rate(3.0).unwrap() - 0.0401).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftedCurve<C> {
    base: C,
    shift: f64,
}

impl<C: ZeroCurve> ShiftedCurve<C> {
    /// Creates a shifted curve.
    ///
    /// # Arguments
    ///
    /// * `base` - The underlying curve
    /// * `shift` - The spread to add (as decimal, e.g., 0.01 for 100 bps)
    pub fn new(base: C, shift: f64) -> Self {
        Self { base, shift }
    }

    /// Returns the shift applied to this curve.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns a reference to the base curve.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: ZeroCurve> ZeroCurve for ShiftedCurve<C> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.base.zero_rate(t)? + self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{FlatCurve, FnCurve};
    use approx::assert_relative_eq;

    #[test]
    fn test_parallel_shift() {
        let base = FnCurve::new(|t| 0.02 + 0.001 * t);
        let shifted = ShiftedCurve::new(&base, 0.005);

        for t in [0.5, 2.0, 10.0] {
            assert_relative_eq!(
                shifted.zero_rate(t).unwrap() - base.zero_rate(t).unwrap(),
                0.005,
                epsilon = 1e-15
            );
        }
        assert_relative_eq!(shifted.shift(), 0.005);
    }

    #[test]
    fn test_shift_lowers_discount_factor() {
        let base = FlatCurve::new(0.03);
        let up = ShiftedCurve::new(base, 0.01);
        let down = ShiftedCurve::new(base, -0.01);

        let df = base.discount_factor(5.0, 2).unwrap();
        assert!(up.discount_factor(5.0, 2).unwrap() < df);
        assert!(down.discount_factor(5.0, 2).unwrap() > df);
        assert_eq!(up.base().rate(), 0.03);
    }

    #[test]
    fn test_base_errors_propagate() {
        let shifted = ShiftedCurve::new(FlatCurve::new(f64::INFINITY), 0.01);
        assert!(shifted.zero_rate(1.0).is_err());
    }
}
