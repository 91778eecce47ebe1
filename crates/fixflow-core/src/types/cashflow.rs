//! Cash flow types for bond analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A single cash flow at a fractional-year offset from the valuation date.
///
/// # Example
///
/// ```rust
/// use fixflow_core::types::{CashFlow, CashFlowType};
///
/// let cf = CashFlow::coupon(0.5, 25.0);
/// assert_eq!(cf.time(), 0.5);
/// assert_eq!(cf.cf_type(), CashFlowType::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Time offset in years
    time: f64,
    /// Cash flow amount
    amount: f64,
    /// Type of cash flow
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64, cf_type: CashFlowType) -> Self {
        Self {
            time,
            amount,
            cf_type,
        }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(time: f64, amount: f64) -> Self {
        Self::new(time, amount, CashFlowType::Coupon)
    }

    /// Creates the final payment: last coupon plus principal redemption.
    #[must_use]
    pub fn final_payment(time: f64, coupon: f64, principal: f64) -> Self {
        Self::new(time, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Returns the time offset in years.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if this flow redeems principal.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(self.cf_type, CashFlowType::CouponAndPrincipal)
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}y: {:.6} ({})", self.time, self.amount, self.cf_type)
    }
}

/// An immutable, non-empty schedule of cash flows ordered by strictly
/// increasing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CashFlow>", into = "Vec<CashFlow>")]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Builds a schedule, checking that it is non-empty, that all values are
    /// finite and that times are strictly increasing.
    pub fn from_flows(flows: Vec<CashFlow>) -> CoreResult<Self> {
        if flows.is_empty() {
            return Err(CoreError::invalid_cash_flow(
                "schedule must contain at least one cash flow",
            ));
        }

        if let Some(bad) = flows
            .iter()
            .find(|cf| !cf.time.is_finite() || !cf.amount.is_finite())
        {
            return Err(CoreError::invalid_cash_flow(format!(
                "non-finite cash flow {bad}"
            )));
        }

        if flows.windows(2).any(|w| w[1].time <= w[0].time) {
            return Err(CoreError::invalid_cash_flow(
                "cash flow times must be strictly increasing",
            ));
        }

        Ok(Self { flows })
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Always false: a schedule holds at least one flow.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Iterates over the flows in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Returns the final flow.
    #[must_use]
    pub fn final_flow(&self) -> &CashFlow {
        &self.flows[self.flows.len() - 1]
    }

    /// Time of the final flow in years.
    #[must_use]
    pub fn maturity(&self) -> f64 {
        self.final_flow().time
    }

    /// Undiscounted sum of all amounts.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.flows.iter().map(|cf| cf.amount).sum()
    }
}

impl TryFrom<Vec<CashFlow>> for CashFlowSchedule {
    type Error = CoreError;

    fn try_from(flows: Vec<CashFlow>) -> CoreResult<Self> {
        Self::from_flows(flows)
    }
}

impl From<CashFlowSchedule> for Vec<CashFlow> {
    fn from(schedule: CashFlowSchedule) -> Self {
        schedule.flows
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}
