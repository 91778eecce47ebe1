//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while assembling core domain types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A cash flow schedule violates its ordering or shape invariants.
    #[error("Invalid cash flow schedule: {reason}")]
    InvalidCashFlow {
        /// Description of the violation.
        reason: String,
    },

    /// A compounding frequency of zero periods per year.
    #[error("Invalid compounding frequency: {periods} periods per year")]
    InvalidFrequency {
        /// The rejected number of periods.
        periods: u32,
    },
}

impl CoreError {
    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }
}
