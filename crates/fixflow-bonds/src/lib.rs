//! # Fixflow Bonds
//!
//! Fixed-rate bond analytics for the Fixflow fixed income library.
//!
//! This crate provides:
//!
//! - **Cash Flows**: regular coupon schedules from face, coupon, frequency and tenor
//! - **Pricing**: present value against any [`ZeroCurve`](fixflow_curves::ZeroCurve)
//! - **Yield**: yield-to-maturity by safeguarded Newton-Raphson with bisection fallback
//! - **Risk**: DV01, Macaulay and modified duration, convexity
//! - **Batch**: the same operations over many bonds, optionally in parallel
//!
//! Times are year fractions from the valuation date; rates are decimals
//! (0.05 for 5%) compounded `frequency` times per year.
//!
//! ## Example
//!
//! ```rust
//! use fixflow_bonds::prelude::*;
//! use fixflow_curves::PillarCurve;
//!
//! let bond = FixedRateBond::new(1000.0, 0.05, 2, 2.0).unwrap();
//!
//! // Four flows: 25, 25, 25, 1025
//! let flows = bond.cash_flows().unwrap();
//! assert_eq!(flows.len(), 4);
//!
//! let curve = PillarCurve::new(vec![0.5, 1.0, 2.0], vec![0.03, 0.035, 0.04]).unwrap();
//! let pv = bond.price(&curve).unwrap();
//!
//! let ytm = bond.yield_to_maturity(pv, &YieldSolver::new()).unwrap();
//! let risk = bond.dv01(ytm.yield_value, DEFAULT_BUMP).unwrap();
//! assert!(risk > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod batch;
pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{price_many, risk_many, solve_ytm_many};
    pub use crate::cashflows::generate_cashflows;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{FixedRateBond, FixedRateBondBuilder};
    pub use crate::pricing::{price, price_at_yield, solve_ytm, YieldResult, YieldSolver};
    pub use crate::risk::{dv01, dv01_curve, risk_metrics, RiskMetrics, DEFAULT_BUMP};
}

pub use cashflows::generate_cashflows;
pub use error::{BondError, BondResult};
pub use instruments::FixedRateBond;
pub use pricing::{price, price_at_yield, solve_ytm, YieldResult, YieldSolver};
pub use risk::{dv01, dv01_curve, risk_metrics, RiskMetrics};
