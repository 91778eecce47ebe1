//! Fixflow Configuration Layer
//!
//! Pricing defaults for the Fixflow fixed income library: yield solver
//! tolerance and iteration cap, Newton starting point, DV01 bump, and the
//! default face and coupon frequency.
//!
//! # Example
//!
//! ```rust
//! use fixflow_config::{from_toml_str, PricingConfig, Validate};
//!
//! let config: PricingConfig = from_toml_str(
//!     r#"
//!     solver_tolerance = 1e-12
//!     initial_guess = 0.05
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.max_iterations, 100);
//! assert!(config.is_valid());
//!
//! // Invalid values are reported per field
//! let bad = PricingConfig::new().with_max_iterations(0);
//! assert_eq!(bad.validate()[0].field, "max_iterations");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod loader;
mod pricing;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::{
    from_json_str, from_str, from_toml_str, load_file, save_file, to_string, ConfigFormat,
};
pub use pricing::PricingConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::loader::{load_file, ConfigFormat};
    pub use crate::pricing::PricingConfig;
}
