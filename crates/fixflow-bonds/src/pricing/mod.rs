//! Present-value pricing and yield-to-maturity.
//!
//! - [`price`]: discount a bond's schedule against any [`ZeroCurve`]
//! - [`price_at_yield`]: the same against a flat yield
//! - [`solve_ytm`] / [`YieldSolver`]: the inverse problem

pub mod discounting;
mod yield_solver;

pub use discounting::{discount_at_yield, discount_flow, DiscountedFlow};
pub use yield_solver::{
    solve_ytm, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS, YIELD_BRACKET,
};

use fixflow_core::CashFlowSchedule;
use fixflow_curves::{CurveError, FlatCurve, ZeroCurve};
use log::trace;

use crate::cashflows::generate_cashflows;
use crate::error::BondResult;

/// Present value of a fixed-rate bond against a zero curve.
///
/// Each flow at time `t` is discounted at its own rate `r = curve(t)` as
/// `(1 + r/frequency)^(-frequency t)`. The curve is queried once per flow.
///
/// # Errors
///
/// Schedule errors from [`generate_cashflows`], and curve errors unchanged.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::pricing::price;
/// use fixflow_curves::FlatCurve;
///
/// // A bond priced at its own coupon rate is worth par
/// let pv = price(100.0, 0.05, 2, 10.0, &FlatCurve::new(0.05)).unwrap();
/// assert!((pv - 100.0).abs() < 1e-10);
/// ```
pub fn price<C>(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    curve: &C,
) -> BondResult<f64>
where
    C: ZeroCurve + ?Sized,
{
    let schedule = generate_cashflows(face, coupon_rate, frequency, tenor_years)?;
    price_schedule(&schedule, frequency, curve)
}

/// Present value of an already generated schedule against a zero curve.
pub fn price_schedule<C>(schedule: &CashFlowSchedule, frequency: u32, curve: &C) -> BondResult<f64>
where
    C: ZeroCurve + ?Sized,
{
    let m = f64::from(frequency);
    let mut pv = 0.0;

    for cf in schedule {
        let rate = curve.zero_rate(cf.time())?;
        if 1.0 + rate / m <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "zero rate {rate} at t={} is at or below -{frequency}",
                cf.time()
            ))
            .into());
        }
        pv += discount_flow(cf.amount(), cf.time(), rate, frequency).pv;
    }

    trace!("priced {} flows to {pv}", schedule.len());
    Ok(pv)
}

/// Present value at a flat yield (a [`FlatCurve`] at `yield_rate`).
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::pricing::price_at_yield;
///
/// let pv = price_at_yield(100.0, 0.05, 2, 5.0, 0.06).unwrap();
/// assert!(pv < 100.0);
/// ```
pub fn price_at_yield(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    yield_rate: f64,
) -> BondResult<f64> {
    price(
        face,
        coupon_rate,
        frequency,
        tenor_years,
        &FlatCurve::new(yield_rate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;
    use fixflow_curves::{FnCurve, PillarCurve, ShiftedCurve};

    #[test]
    fn test_par_bond() {
        for frequency in [1, 2, 4, 12] {
            let pv = price(100.0, 0.06, frequency, 7.0, &FlatCurve::new(0.06)).unwrap();
            assert_relative_eq!(pv, 100.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_discount_and_premium() {
        let discount = price_at_yield(100.0, 0.04, 2, 10.0, 0.05).unwrap();
        let premium = price_at_yield(100.0, 0.04, 2, 10.0, 0.03).unwrap();

        assert!(discount < 100.0);
        assert!(premium > 100.0);
    }

    #[test]
    fn test_known_price() {
        // 5% annual, 3 years at 6%
        let expected = 5.0 / 1.06 + 5.0 / 1.06_f64.powi(2) + 105.0 / 1.06_f64.powi(3);
        let pv = price_at_yield(100.0, 0.05, 1, 3.0, 0.06).unwrap();

        assert_relative_eq!(pv, expected, epsilon = 1e-12);
        assert_relative_eq!(pv, 97.326_988_050_5, epsilon = 1e-9);
    }

    #[test]
    fn test_curve_rate_per_flow() {
        // Each flow discounted at its own pillar rate
        let curve = PillarCurve::new(vec![1.0, 2.0], vec![0.02, 0.04]).unwrap();
        let pv = price(100.0, 0.05, 1, 2.0, &curve).unwrap();

        let expected = 5.0 / 1.02 + 105.0 / 1.04_f64.powi(2);
        assert_relative_eq!(pv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_queried_once_per_flow() {
        let calls = std::cell::Cell::new(0);
        let curve = FnCurve::new(|_| {
            calls.set(calls.get() + 1);
            0.03
        });

        price(100.0, 0.05, 4, 3.0, &curve).unwrap();
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn test_shifted_curve_lowers_price() {
        let base = FlatCurve::new(0.04);
        let up = ShiftedCurve::new(&base, 0.01);

        assert!(price(100.0, 0.05, 2, 5.0, &up).unwrap() < price(100.0, 0.05, 2, 5.0, &base).unwrap());
    }

    #[test]
    fn test_curve_errors_propagate_unchanged() {
        let curve = FnCurve::new(|t| if t > 1.0 { f64::NAN } else { 0.03 });

        match price(100.0, 0.05, 2, 2.0, &curve) {
            Err(BondError::Curve(CurveError::InvalidValue { reason })) => {
                assert!(reason.contains("t=1.5"));
            }
            other => panic!("expected curve error, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_below_minus_frequency() {
        let result = price(100.0, 0.05, 2, 2.0, &FlatCurve::new(-2.5));
        assert!(matches!(result, Err(BondError::Curve(_))));
    }

    #[test]
    fn test_schedule_errors_propagate() {
        assert!(matches!(
            price(100.0, 0.05, 4, 0.0, &FlatCurve::new(0.05)),
            Err(BondError::InvalidSchedule { .. })
        ));
        assert!(matches!(
            price(100.0, 0.05, 0, 5.0, &FlatCurve::new(0.05)),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_dyn_curve() {
        let curve: Box<dyn ZeroCurve> = Box::new(FlatCurve::new(0.05));
        let pv = price(100.0, 0.05, 2, 3.0, curve.as_ref()).unwrap();
        assert_relative_eq!(pv, 100.0, epsilon = 1e-10);
    }
}
