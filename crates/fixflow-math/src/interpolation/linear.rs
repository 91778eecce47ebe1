//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{Extrapolation, Interpolator};

/// Linear interpolation between data points.
///
/// Connects consecutive points with straight lines. Behavior outside
/// `[xs[0], xs[n-1]]` follows the configured [`Extrapolation`].
///
/// # Example
///
/// ```rust
/// use fixflow_math::interpolation::{Extrapolation, Interpolator, LinearInterpolator};
///
/// let xs = vec![1.0, 2.0, 5.0];
/// let ys = vec![0.02, 0.03, 0.04];
///
/// let interp = LinearInterpolator::new(xs, ys)
///     .unwrap()
///     .with_extrapolation(Extrapolation::Flat);
///
/// assert!((interp.interpolate(1.5).unwrap() - 0.025).abs() < 1e-12);
/// assert!((interp.interpolate(10.0).unwrap() - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolation: Extrapolation,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator with extrapolation disabled.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing, finite)
    /// * `ys` - Y coordinates (finite)
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths differ,
    /// a value is not finite, or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("data points must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            extrapolation: Extrapolation::None,
        })
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Returns the extrapolation policy.
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Returns the x coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn last(&self) -> usize {
        self.xs.len() - 1
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        // Index of the first pillar strictly above x
        let upper = self.xs.partition_point(|&probe| probe <= x);
        upper.saturating_sub(1).min(self.xs.len() - 2)
    }

    fn out_of_range(&self, x: f64) -> MathError {
        MathError::ExtrapolationNotAllowed {
            x,
            min: self.xs[0],
            max: self.xs[self.last()],
        }
    }

    fn segment_slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !x.is_finite() {
            return Err(MathError::invalid_input(format!(
                "cannot interpolate at {x}"
            )));
        }

        if !self.in_range(x) {
            match self.extrapolation {
                Extrapolation::None => return Err(self.out_of_range(x)),
                Extrapolation::Flat => {
                    let edge = if x < self.xs[0] { 0 } else { self.last() };
                    return Ok(self.ys[edge]);
                }
                // The end segments are extended below
                Extrapolation::Linear => {}
            }
        }

        let i = self.find_segment(x);
        Ok(self.ys[i] + (x - self.xs[i]) * self.segment_slope(i))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !x.is_finite() {
            return Err(MathError::invalid_input(format!(
                "cannot differentiate at {x}"
            )));
        }

        if !self.in_range(x) {
            match self.extrapolation {
                Extrapolation::None => return Err(self.out_of_range(x)),
                Extrapolation::Flat => return Ok(0.0),
                Extrapolation::Linear => {}
            }
        }

        Ok(self.segment_slope(self.find_segment(x)))
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolation != Extrapolation::None
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.last()]
    }
}
