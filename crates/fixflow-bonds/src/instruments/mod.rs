//! Bond instrument types.
//!
//! - [`FixedRateBond`]: a validated regular fixed-coupon bullet bond

mod fixed_rate;

pub use fixed_rate::{FixedRateBond, FixedRateBondBuilder};
