//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be between 0 and 100.")]
    InvalidCoupon(f64),

    /// Invalid yield.
    #[error("Invalid yield: {0}. Must be between 0 and 100.")]
    InvalidYield(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Invalid DV01 bump.
    #[error("Invalid bump: {0} bps. Must be positive.")]
    InvalidBump(f64),

    /// Malformed `--curve` pillars.
    #[error("Invalid curve '{input}': {reason}. Use \"t:r,t:r,...\" with rates in percent.")]
    InvalidCurve {
        /// The pillars as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
