//! Domain types for fixed income analytics.
//!
//! - [`CashFlow`]: Amount paid at a fractional-year offset
//! - [`CashFlowSchedule`]: Ordered, non-empty sequence of cash flows
//! - [`Compounding`]: Interest compounding convention

mod cashflow;
mod compounding;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use compounding::Compounding;
