//! Error types for bond operations.

use fixflow_curves::CurveError;
use fixflow_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// An instrument or solver parameter is out of its domain.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// No schedule with at least one period could be built.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the failure.
        reason: String,
    },

    /// The yield solver exhausted Newton and bisection without meeting
    /// tolerance, or the price is not attainable inside the yield bracket.
    #[error("Yield solver did not converge: {source}")]
    DidNotConverge {
        /// The bisection failure that ended the solve.
        source: MathError,
    },

    /// Curve error, passed through unchanged.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl BondError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a did-not-converge error.
    #[must_use]
    pub fn did_not_converge(source: MathError) -> Self {
        Self::DidNotConverge { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_input("frequency must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid input: frequency must be positive, got 0"
        );

        let err = BondError::invalid_schedule("tenor 0 gives no coupon periods");
        assert!(err.to_string().starts_with("Invalid schedule"));
    }

    #[test]
    fn test_did_not_converge_keeps_source() {
        let err = BondError::did_not_converge(MathError::convergence_failed(100, 0.5));

        assert!(err.to_string().contains("100 iterations"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_curve_error_is_transparent() {
        let curve_err = CurveError::invalid_value("zero rate at t=1 is NaN");
        let err: BondError = curve_err.clone().into();

        assert_eq!(err.to_string(), curve_err.to_string());
    }
}
