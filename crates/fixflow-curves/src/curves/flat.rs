//! Flat term structure.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::traits::ZeroCurve;

/// A curve returning the same zero rate for every time offset.
///
/// Pricing against a flat curve at rate `y` is pricing at yield `y`.
///
/// # Example
///
/// ```rust
/// use fixflow_curves::{FlatCurve, ZeroCurve};
///
/// let curve = FlatCurve::new(0.05);
/// assert_eq!(curve.zero_rate(10.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatCurve {
    rate: f64,
}

impl FlatCurve {
    /// Creates a flat curve at `rate` (decimal).
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ZeroCurve for FlatCurve {
    fn zero_rate(&self, _t: f64) -> CurveResult<f64> {
        if self.rate.is_finite() {
            Ok(self.rate)
        } else {
            Err(CurveError::invalid_value(format!(
                "flat rate {} is not finite",
                self.rate
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rate() {
        let curve = FlatCurve::new(0.035);
        for t in [0.25, 1.0, 30.0] {
            assert_eq!(curve.zero_rate(t).unwrap(), 0.035);
        }
    }

    #[test]
    fn test_non_finite_rate() {
        let curve = FlatCurve::new(f64::NAN);
        assert!(matches!(
            curve.zero_rate(1.0),
            Err(CurveError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_serde() {
        let curve = FlatCurve::new(0.0425);
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"{"rate":0.0425}"#);

        let back: FlatCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }
}
