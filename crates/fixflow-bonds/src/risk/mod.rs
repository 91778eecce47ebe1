//! Risk metrics for fixed-rate bonds.
//!
//! DV01 is a symmetric finite difference of price over a parallel bump:
//! `0.5 * (P(y - bump) - P(y + bump))`, positive for positive cash flows.
//! Durations and convexity come from the analytic yield derivatives of the
//! same discounting routine the pricer uses.

use fixflow_core::CashFlowSchedule;
use fixflow_curves::{ShiftedCurve, ZeroCurve};
use serde::{Deserialize, Serialize};

use crate::cashflows::generate_cashflows;
use crate::error::{BondError, BondResult};
use crate::pricing::{discount_at_yield, price, price_at_yield, price_schedule, YieldSolver};

/// Default DV01 bump: one basis point.
pub const DEFAULT_BUMP: f64 = 1e-4;

/// Yield risk of a bond at a flat yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Present value at the yield.
    pub price: f64,
    /// Price change for a one basis point parallel move.
    pub dv01: f64,
    /// PV-weighted average time of the flows, in years.
    pub macaulay_duration: f64,
    /// `-(dP/dy) / P`.
    pub modified_duration: f64,
    /// `(d2P/dy2) / P`.
    pub convexity: f64,
}

fn validate_bump(bump: f64) -> BondResult<()> {
    if bump.is_finite() && bump > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_input(format!(
            "bump must be positive and finite, got {bump}"
        )))
    }
}

fn validate_yield(ytm: f64, frequency: u32) -> BondResult<()> {
    if ytm.is_finite() && 1.0 + ytm / f64::from(frequency) > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_input(format!(
            "yield {ytm} is not usable at frequency {frequency}"
        )))
    }
}

/// Dollar value of a basis point at a flat yield.
///
/// Reprices at `ytm + bump` and `ytm - bump` and returns half the
/// difference, so the result is positive when price falls as yield rises.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::risk::{dv01, DEFAULT_BUMP};
///
/// let risk = dv01(100.0, 0.05, 2, 10.0, 0.05, DEFAULT_BUMP).unwrap();
/// assert!(risk > 0.07 && risk < 0.08);
/// ```
pub fn dv01(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    ytm: f64,
    bump: f64,
) -> BondResult<f64> {
    validate_bump(bump)?;
    let up = price_at_yield(face, coupon_rate, frequency, tenor_years, ytm + bump)?;
    let down = price_at_yield(face, coupon_rate, frequency, tenor_years, ytm - bump)?;
    Ok(0.5 * (down - up))
}

/// DV01 at the yield implied by `market_price`.
///
/// Solves the yield with `solver`, then applies [`dv01`].
pub fn dv01_from_price(
    market_price: f64,
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    solver: &YieldSolver,
    bump: f64,
) -> BondResult<f64> {
    let schedule = generate_cashflows(face, coupon_rate, frequency, tenor_years)?;
    let ytm = solver.solve(&schedule, market_price, frequency)?.yield_value;
    dv01(face, coupon_rate, frequency, tenor_years, ytm, bump)
}

/// DV01 against an arbitrary zero curve.
///
/// The curve is shifted in parallel by `+bump` and `-bump` with
/// [`ShiftedCurve`]; each shifted curve prices the bond.
pub fn dv01_curve<C>(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    curve: &C,
    bump: f64,
) -> BondResult<f64>
where
    C: ZeroCurve + ?Sized,
{
    validate_bump(bump)?;
    let up = price(face, coupon_rate, frequency, tenor_years, &ShiftedCurve::new(curve, bump))?;
    let down = price(face, coupon_rate, frequency, tenor_years, &ShiftedCurve::new(curve, -bump))?;
    Ok(0.5 * (down - up))
}

/// DV01 of an already generated schedule against a curve.
pub fn dv01_schedule<C>(schedule: &CashFlowSchedule, frequency: u32, curve: &C, bump: f64) -> BondResult<f64>
where
    C: ZeroCurve + ?Sized,
{
    validate_bump(bump)?;
    let up = price_schedule(schedule, frequency, &ShiftedCurve::new(curve, bump))?;
    let down = price_schedule(schedule, frequency, &ShiftedCurve::new(curve, -bump))?;
    Ok(0.5 * (down - up))
}

/// Price, DV01, durations and convexity at a flat yield.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::risk::risk_metrics;
///
/// // A zero-coupon bond's Macaulay duration is its maturity
/// let metrics = risk_metrics(100.0, 0.0, 2, 7.0, 0.04).unwrap();
/// assert!((metrics.macaulay_duration - 7.0).abs() < 1e-12);
/// ```
pub fn risk_metrics(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    ytm: f64,
) -> BondResult<RiskMetrics> {
    let schedule = generate_cashflows(face, coupon_rate, frequency, tenor_years)?;
    schedule_risk_metrics(&schedule, frequency, ytm)
}

/// [`risk_metrics`] for an already generated schedule.
pub fn schedule_risk_metrics(
    schedule: &CashFlowSchedule,
    frequency: u32,
    ytm: f64,
) -> BondResult<RiskMetrics> {
    validate_yield(ytm, frequency)?;
    validate_yield(ytm - DEFAULT_BUMP, frequency)?;

    let total = discount_at_yield(schedule, ytm, frequency);
    let up = discount_at_yield(schedule, ytm + DEFAULT_BUMP, frequency).pv;
    let down = discount_at_yield(schedule, ytm - DEFAULT_BUMP, frequency).pv;

    let modified_duration = -total.dpv_dy / total.pv;

    Ok(RiskMetrics {
        price: total.pv,
        dv01: 0.5 * (down - up),
        macaulay_duration: modified_duration * (1.0 + ytm / f64::from(frequency)),
        modified_duration,
        convexity: total.d2pv_dy2 / total.pv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fixflow_curves::{FlatCurve, PillarCurve};

    #[test]
    fn test_dv01_positive() {
        for (coupon, tenor) in [(0.0, 1.0), (0.05, 2.0), (0.08, 30.0)] {
            let risk = dv01(100.0, coupon, 2, tenor, 0.04, DEFAULT_BUMP).unwrap();
            assert!(risk > 0.0, "dv01 {risk} for coupon {coupon} tenor {tenor}");
        }
    }

    #[test]
    fn test_dv01_close_to_modified_duration() {
        let metrics = risk_metrics(100.0, 0.05, 2, 10.0, 0.05).unwrap();
        let approx_dv01 = metrics.modified_duration * metrics.price * 1e-4;

        assert_relative_eq!(metrics.dv01, approx_dv01, max_relative = 1e-6);
        assert_relative_eq!(
            metrics.dv01,
            dv01(100.0, 0.05, 2, 10.0, 0.05, DEFAULT_BUMP).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_coupon_metrics() {
        let metrics = risk_metrics(100.0, 0.0, 2, 5.0, 0.06).unwrap();

        assert_relative_eq!(metrics.price, 100.0 * 1.03_f64.powi(-10), epsilon = 1e-10);
        assert_relative_eq!(metrics.macaulay_duration, 5.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.modified_duration, 5.0 / 1.03, epsilon = 1e-12);
        assert_relative_eq!(
            metrics.convexity,
            5.0 * 5.5 / 1.03_f64.powi(2),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_coupon_bond_duration_below_maturity() {
        let metrics = risk_metrics(100.0, 0.06, 2, 10.0, 0.06).unwrap();

        assert!(metrics.macaulay_duration < 10.0);
        assert!(metrics.modified_duration < metrics.macaulay_duration);
        assert!(metrics.convexity > 0.0);
    }

    #[test]
    fn test_curve_dv01_matches_flat_yield_dv01() {
        let flat = dv01_curve(100.0, 0.05, 2, 10.0, &FlatCurve::new(0.045), DEFAULT_BUMP).unwrap();
        let at_yield = dv01(100.0, 0.05, 2, 10.0, 0.045, DEFAULT_BUMP).unwrap();

        assert_relative_eq!(flat, at_yield, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_dv01_on_pillar_curve() {
        let curve = PillarCurve::new(vec![1.0, 5.0, 10.0], vec![0.03, 0.04, 0.045]).unwrap();
        let schedule = generate_cashflows(100.0, 0.05, 2, 10.0).unwrap();

        let risk = dv01_curve(100.0, 0.05, 2, 10.0, &curve, DEFAULT_BUMP).unwrap();
        assert!(risk > 0.0);
        assert_relative_eq!(
            risk,
            dv01_schedule(&schedule, 2, &curve, DEFAULT_BUMP).unwrap(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_dv01_from_price() {
        let price = price_at_yield(100.0, 0.05, 2, 10.0, 0.06).unwrap();
        let from_price =
            dv01_from_price(price, 100.0, 0.05, 2, 10.0, &YieldSolver::new(), DEFAULT_BUMP)
                .unwrap();

        assert_relative_eq!(
            from_price,
            dv01(100.0, 0.05, 2, 10.0, 0.06, DEFAULT_BUMP).unwrap(),
            max_relative = 1e-8
        );
    }

    #[test]
    fn test_invalid_bump_and_yield() {
        assert!(matches!(
            dv01(100.0, 0.05, 2, 10.0, 0.05, 0.0),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            dv01_curve(100.0, 0.05, 2, 10.0, &FlatCurve::new(0.05), f64::NAN),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            risk_metrics(100.0, 0.05, 2, 10.0, f64::NAN),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            risk_metrics(100.0, 0.05, 2, 10.0, -2.0),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_risk_metrics_serde() {
        let metrics = risk_metrics(100.0, 0.05, 2, 5.0, 0.05).unwrap();
        let json = serde_json::to_string(&metrics).unwrap();
        let back: RiskMetrics = serde_json::from_str(&json).unwrap();

        assert_relative_eq!(back.dv01, metrics.dv01);
        assert!(json.contains("macaulay_duration"));
    }
}
