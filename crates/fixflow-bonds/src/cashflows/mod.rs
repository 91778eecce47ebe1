//! Cash flow schedule generation.
//!
//! A fixed-rate bond pays `coupon_rate * face / frequency` at each of
//! `round(tenor_years * frequency)` regular periods, with the principal
//! added to the final coupon. There are no stubs and no accrual: period `k`
//! pays at `k / frequency` years.

use fixflow_core::{CashFlow, CashFlowSchedule};

use crate::error::{BondError, BondResult};

/// Upper bound on the number of coupon periods in one schedule.
pub const MAX_PERIODS: u32 = 100_000;

/// Checks the terms shared by every schedule-based operation.
pub(crate) fn validate_terms(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
) -> BondResult<()> {
    if !face.is_finite() || face <= 0.0 {
        return Err(BondError::invalid_input(format!(
            "face must be positive and finite, got {face}"
        )));
    }
    if !coupon_rate.is_finite() || coupon_rate < 0.0 {
        return Err(BondError::invalid_input(format!(
            "coupon rate must be non-negative and finite, got {coupon_rate}"
        )));
    }
    if frequency == 0 {
        return Err(BondError::invalid_input(
            "frequency must be a positive number of periods per year",
        ));
    }
    if !tenor_years.is_finite() || tenor_years < 0.0 {
        return Err(BondError::invalid_input(format!(
            "tenor must be non-negative and finite, got {tenor_years}"
        )));
    }
    Ok(())
}

/// Number of coupon periods: `tenor_years * frequency` rounded to the
/// nearest integer.
///
/// Slightly non-integral tenors are accepted: 4.98 years quarterly is 20
/// periods.
pub fn period_count(frequency: u32, tenor_years: f64) -> BondResult<u32> {
    let periods = (tenor_years * f64::from(frequency)).round();

    if periods < 1.0 {
        return Err(BondError::invalid_schedule(format!(
            "tenor {tenor_years} at frequency {frequency} gives no coupon periods"
        )));
    }
    if periods > f64::from(MAX_PERIODS) {
        return Err(BondError::invalid_input(format!(
            "tenor {tenor_years} at frequency {frequency} exceeds {MAX_PERIODS} periods"
        )));
    }

    Ok(periods as u32)
}

/// Generates the cash flow schedule of a regular fixed-rate bond.
///
/// # Arguments
///
/// * `face` - Face (principal) amount, positive
/// * `coupon_rate` - Annual coupon rate as a decimal, non-negative
/// * `frequency` - Coupon periods per year, positive
/// * `tenor_years` - Time to maturity in years
///
/// # Errors
///
/// - [`BondError::InvalidInput`] for a non-positive face or frequency, a
///   negative coupon rate, or a negative or non-finite tenor
/// - [`BondError::InvalidSchedule`] when the tenor rounds to zero periods
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::cashflows::generate_cashflows;
///
/// let schedule = generate_cashflows(1000.0, 0.05, 2, 2.0).unwrap();
///
/// let times: Vec<f64> = schedule.iter().map(|cf| cf.time()).collect();
/// let amounts: Vec<f64> = schedule.iter().map(|cf| cf.amount()).collect();
/// assert_eq!(times, vec![0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(amounts, vec![25.0, 25.0, 25.0, 1025.0]);
/// ```
pub fn generate_cashflows(
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
) -> BondResult<CashFlowSchedule> {
    validate_terms(face, coupon_rate, frequency, tenor_years)?;
    let periods = period_count(frequency, tenor_years)?;

    let m = f64::from(frequency);
    let coupon = coupon_rate * face / m;

    let flows = (1..=periods)
        .map(|k| {
            let time = f64::from(k) / m;
            if k == periods {
                CashFlow::final_payment(time, coupon, face)
            } else {
                CashFlow::coupon(time, coupon)
            }
        })
        .collect();

    CashFlowSchedule::from_flows(flows).map_err(|e| BondError::invalid_schedule(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fixflow_core::CashFlowType;

    #[test]
    fn test_semi_annual_two_years() {
        let schedule = generate_cashflows(1000.0, 0.05, 2, 2.0).unwrap();

        assert_eq!(schedule.len(), 4);
        let expected = [(0.5, 25.0), (1.0, 25.0), (1.5, 25.0), (2.0, 1025.0)];
        for (cf, (t, amount)) in schedule.iter().zip(expected) {
            assert_relative_eq!(cf.time(), t);
            assert_relative_eq!(cf.amount(), amount);
        }
        assert_eq!(schedule.final_flow().cf_type(), CashFlowType::CouponAndPrincipal);
        assert_eq!(
            schedule.iter().filter(|cf| cf.is_principal()).count(),
            1
        );
    }

    #[test]
    fn test_tenor_rounding() {
        // 4.98 years quarterly rounds to 20 periods
        let schedule = generate_cashflows(100.0, 0.04, 4, 4.98).unwrap();
        assert_eq!(schedule.len(), 20);
        assert_relative_eq!(schedule.maturity(), 5.0);
    }

    #[test]
    fn test_zero_coupon() {
        let schedule = generate_cashflows(100.0, 0.0, 1, 3.0).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_relative_eq!(schedule.total_amount(), 100.0);
        assert_relative_eq!(schedule.final_flow().amount(), 100.0);
    }

    #[test]
    fn test_single_period() {
        let schedule = generate_cashflows(100.0, 0.06, 12, 1.0 / 12.0).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_relative_eq!(schedule.final_flow().amount(), 100.5);
    }

    #[test]
    fn test_zero_tenor_is_invalid_schedule() {
        assert!(matches!(
            generate_cashflows(100.0, 0.05, 4, 0.0),
            Err(BondError::InvalidSchedule { .. })
        ));
        // 0.1 years annually rounds to zero periods
        assert!(matches!(
            generate_cashflows(100.0, 0.05, 1, 0.1),
            Err(BondError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            (0.0, 0.05, 2, 5.0),
            (-100.0, 0.05, 2, 5.0),
            (f64::NAN, 0.05, 2, 5.0),
            (100.0, -0.01, 2, 5.0),
            (100.0, f64::INFINITY, 2, 5.0),
            (100.0, 0.05, 0, 5.0),
            (100.0, 0.05, 2, -1.0),
            (100.0, 0.05, 2, f64::NAN),
            (100.0, 0.05, 12, 1e9),
        ];

        for (face, coupon, freq, tenor) in cases {
            assert!(
                matches!(
                    generate_cashflows(face, coupon, freq, tenor),
                    Err(BondError::InvalidInput { .. })
                ),
                "expected InvalidInput for ({face}, {coupon}, {freq}, {tenor})"
            );
        }
    }

    #[test]
    fn test_times_strictly_increasing() {
        let schedule = generate_cashflows(100.0, 0.05, 12, 30.0).unwrap();

        assert_eq!(schedule.len(), 360);
        assert!(schedule
            .as_slice()
            .windows(2)
            .all(|w| w[1].time() > w[0].time()));
    }
}
