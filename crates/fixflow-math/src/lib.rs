//! # Fixflow Math
//!
//! Mathematical utilities for the Fixflow fixed income library.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (Newton-Raphson, Bisection, and a
//!   safeguarded Newton solver that falls back to bisection)
//! - **Interpolation**: Linear interpolation with optional extrapolation
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Careful handling of edge cases
//! - **No Silent Failures**: Every solver either meets its tolerance or errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Extrapolation, Interpolator, LinearInterpolator};
    pub use crate::solvers::{
        bisection, newton_raphson, safeguarded, SafeguardedResult, SolverConfig, SolverMethod,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
