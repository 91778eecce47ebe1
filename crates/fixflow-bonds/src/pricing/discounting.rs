//! Per-flow discounting under discrete compounding.
//!
//! Every price, yield derivative and risk figure in this crate goes through
//! [`discount_flow`], so the pricer and the yield solver cannot drift apart
//! numerically.

use fixflow_core::rates;
use fixflow_core::CashFlowSchedule;

/// Present value of one flow and its first two yield derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiscountedFlow {
    /// `amount * (1 + y/m)^(-m t)`
    pub pv: f64,
    /// `d pv / dy = -t * pv / (1 + y/m)`
    pub dpv_dy: f64,
    /// `d2 pv / dy2 = t (t + 1/m) pv / (1 + y/m)^2`
    pub d2pv_dy2: f64,
}

impl std::ops::Add for DiscountedFlow {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            pv: self.pv + rhs.pv,
            dpv_dy: self.dpv_dy + rhs.dpv_dy,
            d2pv_dy2: self.d2pv_dy2 + rhs.d2pv_dy2,
        }
    }
}

impl std::iter::Sum for DiscountedFlow {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, flow| acc + flow)
    }
}

/// Discounts `amount` paid at `time` years at rate `rate` compounded
/// `frequency` times per year.
///
/// `frequency` must be positive; callers validate it.
#[inline]
#[must_use]
pub fn discount_flow(amount: f64, time: f64, rate: f64, frequency: u32) -> DiscountedFlow {
    let m = f64::from(frequency);
    let growth = 1.0 + rate / m;
    let pv = amount * rates::discount_factor(rate, frequency, time);
    let dpv_dy = -time * pv / growth;

    DiscountedFlow {
        pv,
        dpv_dy,
        d2pv_dy2: time * (time + 1.0 / m) * pv / (growth * growth),
    }
}

/// Discounts a whole schedule at a flat yield.
#[must_use]
pub fn discount_at_yield(schedule: &CashFlowSchedule, yield_rate: f64, frequency: u32) -> DiscountedFlow {
    schedule
        .iter()
        .map(|cf| discount_flow(cf.amount(), cf.time(), yield_rate, frequency))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fixflow_core::CashFlow;

    #[test]
    fn test_discount_flow_value() {
        let flow = discount_flow(105.0, 2.0, 0.05, 2);
        assert_relative_eq!(flow.pv, 105.0 * 1.025_f64.powi(-4), epsilon = 1e-12);
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let h = 1e-6;
        for frequency in [1, 2, 4, 12] {
            let y = 0.047;
            let flow = discount_flow(100.0, 7.5, y, frequency);
            let up = discount_flow(100.0, 7.5, y + h, frequency);
            let down = discount_flow(100.0, 7.5, y - h, frequency);

            let fd1 = (up.pv - down.pv) / (2.0 * h);
            let fd2 = (up.pv - 2.0 * flow.pv + down.pv) / (h * h);

            assert_relative_eq!(flow.dpv_dy, fd1, max_relative = 1e-7);
            assert_relative_eq!(flow.d2pv_dy2, fd2, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_discount_at_yield_sums_flows() {
        let schedule = CashFlowSchedule::from_flows(vec![
            CashFlow::coupon(1.0, 5.0),
            CashFlow::final_payment(2.0, 5.0, 100.0),
        ])
        .unwrap();

        let total = discount_at_yield(&schedule, 0.05, 1);

        assert_relative_eq!(total.pv, 100.0, epsilon = 1e-12);
        assert_relative_eq!(
            total.dpv_dy,
            -(5.0 / 1.05_f64.powi(2) + 2.0 * 105.0 / 1.05_f64.powi(3)),
            epsilon = 1e-12
        );
    }
}
