//! Interpolated pillar curves.

use fixflow_math::interpolation::{Extrapolation, Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::traits::ZeroCurve;

/// A zero curve interpolated linearly between (tenor, rate) pillars.
///
/// Outside the pillar range the first/last rate is held flat unless another
/// [`Extrapolation`] policy is set. This is the shape a bootstrapped curve is
/// typically handed to the pricer in.
///
/// # Example
///
/// ```rust
/// use fixflow_curves::{PillarCurve, ZeroCurve};
///
/// let curve = PillarCurve::from_pillars(&[(0.5, 0.02), (2.0, 0.03), (10.0, 0.04)]).unwrap();
///
/// assert!((curve.zero_rate(1.25).unwrap() - 0.025).abs() < 1e-12);
/// assert!((curve.zero_rate(0.1).unwrap() - 0.02).abs() < 1e-12); // flat before first pillar
/// assert!((curve.zero_rate(30.0).unwrap() - 0.04).abs() < 1e-12); // flat after last pillar
/// ```
#[derive(Debug, Clone)]
pub struct PillarCurve {
    interpolator: LinearInterpolator,
}

impl PillarCurve {
    /// Builds a curve from parallel tenor and rate vectors.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientPoints`] for fewer than two pillars
    /// - [`CurveError::NonMonotonicTenors`] if tenors are not strictly increasing
    /// - [`CurveError::InvalidValue`] for negative or non-finite tenors, non-finite
    ///   rates, or mismatched lengths
    pub fn new(tenors: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if tenors.len() != rates.len() {
            return Err(CurveError::invalid_value(format!(
                "{} tenors but {} rates",
                tenors.len(),
                rates.len()
            )));
        }
        if tenors.len() < 2 {
            return Err(CurveError::InsufficientPoints {
                required: 2,
                got: tenors.len(),
            });
        }
        if let Some(t) = tenors.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(CurveError::invalid_value(format!(
                "pillar tenor {t} must be finite and non-negative"
            )));
        }
        if let Some(r) = rates.iter().find(|r| !r.is_finite()) {
            return Err(CurveError::invalid_value(format!(
                "pillar rate {r} is not finite"
            )));
        }
        for (index, pair) in tenors.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(CurveError::NonMonotonicTenors {
                    index: index + 1,
                    prev: pair[0],
                    current: pair[1],
                });
            }
        }

        let interpolator =
            LinearInterpolator::new(tenors, rates)?.with_extrapolation(Extrapolation::Flat);

        Ok(Self { interpolator })
    }

    /// Builds a curve from `(tenor, rate)` pairs.
    pub fn from_pillars(pillars: &[(f64, f64)]) -> CurveResult<Self> {
        let (tenors, rates) = pillars.iter().copied().unzip();
        Self::new(tenors, rates)
    }

    /// Sets the extrapolation policy outside the pillar range.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.interpolator = self.interpolator.with_extrapolation(extrapolation);
        self
    }

    /// Returns the pillar tenors.
    pub fn tenors(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Returns the pillar rates.
    pub fn rates(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Returns the pillars as `(tenor, rate)` pairs.
    pub fn pillars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tenors().iter().copied().zip(self.rates().iter().copied())
    }

    /// Returns the tenor of the last pillar.
    pub fn max_tenor(&self) -> f64 {
        self.interpolator.max_x()
    }
}

impl ZeroCurve for PillarCurve {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(t)?)
    }
}
