//! Interpolation for pillar-based term structures.
//!
//! Only piecewise-linear interpolation is provided. Zero-rate pillars are
//! interpolated linearly; outside the pillar range the [`Extrapolation`]
//! policy decides what happens.

mod linear;

pub use linear::LinearInterpolator;

use std::fmt;

use crate::error::MathResult;

/// Behavior outside the data range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Queries outside the data range are errors.
    #[default]
    None,
    /// Hold the first/last value constant.
    Flat,
    /// Extend the first/last segment.
    Linear,
}

impl fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extrapolation::None => write!(f, "None"),
            Extrapolation::Flat => write!(f, "Flat"),
            Extrapolation::Linear => write!(f, "Linear"),
        }
    }
}

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trait_object() {
        let interp: Box<dyn Interpolator> = Box::new(
            LinearInterpolator::new(vec![1.0, 2.0], vec![0.02, 0.04]).unwrap(),
        );

        assert!(interp.in_range(1.5));
        assert!(!interp.in_range(2.5));
        assert!(!interp.allows_extrapolation());
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_default() {
        assert_eq!(Extrapolation::default(), Extrapolation::None);
        assert_eq!(Extrapolation::Flat.to_string(), "Flat");
    }
}
