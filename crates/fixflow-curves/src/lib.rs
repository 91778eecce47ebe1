//! # Fixflow Curves
//!
//! Zero-rate term structures for the Fixflow fixed income library.
//!
//! A curve is anything that maps a time offset in years to a zero rate. The
//! pricer only ever evaluates curves pointwise through the [`ZeroCurve`]
//! trait, so flat curves, interpolated pillar curves, shifted stress curves
//! and plain closures are interchangeable.
//!
//! - [`FlatCurve`]: the same rate at every time
//! - [`PillarCurve`]: linear interpolation between (time, rate) pillars
//! - [`ShiftedCurve`]: a parallel shift of any other curve
//! - [`FnCurve`]: adapts a closure
//!
//! ## Quick Start
//!
//! ```rust
//! use fixflow_curves::prelude::*;
//!
//! let curve = PillarCurve::new(vec![1.0, 2.0, 5.0], vec![0.03, 0.035, 0.04]).unwrap();
//!
//! // Zero rate at 3 years, linearly interpolated
//! let rate = curve.zero_rate(3.0).unwrap();
//! assert!((rate - 0.036_666_666_666_666_67).abs() < 1e-12);
//!
//! // Discount factor with semi-annual compounding
//! let df = curve.discount_factor(3.0, 2).unwrap();
//! assert!(df < 1.0);
//!
//! // +25bp stress scenario
//! let stressed = ShiftedCurve::new(&curve, 0.0025);
//! assert!(stressed.discount_factor(3.0, 2).unwrap() < df);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curves;
pub mod error;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{FlatCurve, FnCurve, PillarCurve, ShiftedCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::traits::ZeroCurve;
}

pub use curves::{FlatCurve, FnCurve, PillarCurve, ShiftedCurve};
pub use error::{CurveError, CurveResult};
pub use traits::ZeroCurve;
