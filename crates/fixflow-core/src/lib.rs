//! # Fixflow Core
//!
//! Core types and elementary rate primitives for the Fixflow fixed income library.
//!
//! This crate provides the foundational building blocks used throughout Fixflow:
//!
//! - **Rates**: Finite-frequency and continuous time-value-of-money primitives
//! - **Types**: `CashFlow`, `CashFlowSchedule` and the `Compounding` convention
//!
//! ## Conventions
//!
//! - Rates are decimals (`0.05` is 5%)
//! - Times are fractional years from the valuation date
//! - Day-count conversion happens upstream of this crate
//!
//! ## Example
//!
//! ```rust
//! use fixflow_core::rates::discount_factor;
//!
//! // 5% semi-annual rate, 2 years
//! let df = discount_factor(0.05, 2, 2.0);
//! assert!((df - 1.025_f64.powi(-4)).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rates;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rates::{
        continuous_to_nominal, discount_factor, effective_annual_rate, future_value,
        nominal_to_continuous, present_value,
    };
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Compounding};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, CashFlowType, Compounding};
