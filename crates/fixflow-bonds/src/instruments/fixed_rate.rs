//! Fixed rate bond implementation.
//!
//! [`FixedRateBond`] bundles the four terms every operation in this crate
//! takes (face, coupon rate, frequency, tenor), validates them once, and
//! delegates to the free functions in [`crate::cashflows`],
//! [`crate::pricing`] and [`crate::risk`].

use fixflow_core::CashFlowSchedule;
use fixflow_curves::ZeroCurve;
use serde::{Deserialize, Serialize};

use crate::cashflows::{generate_cashflows, period_count, validate_terms};
use crate::error::{BondError, BondResult};
use crate::pricing::{self, YieldResult, YieldSolver};
use crate::risk::{self, RiskMetrics};

/// A regular fixed-rate bullet bond.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::instruments::FixedRateBond;
/// use fixflow_bonds::pricing::YieldSolver;
///
/// let bond = FixedRateBond::builder()
///     .coupon_rate(0.045)
///     .tenor_years(10.0)
///     .build()
///     .unwrap();
///
/// let price = bond.price_at_yield(0.05).unwrap();
/// let ytm = bond.yield_to_maturity(price, &YieldSolver::new()).unwrap();
/// assert!((ytm.yield_value - 0.05).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FixedRateBondData")]
pub struct FixedRateBond {
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
}

/// Unvalidated serde form of [`FixedRateBond`].
#[derive(Deserialize)]
struct FixedRateBondData {
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
}

impl TryFrom<FixedRateBondData> for FixedRateBond {
    type Error = BondError;

    fn try_from(data: FixedRateBondData) -> BondResult<Self> {
        Self::new(data.face, data.coupon_rate, data.frequency, data.tenor_years)
    }
}

impl FixedRateBond {
    /// Creates a bond, checking that it yields a schedule of at least one
    /// period.
    ///
    /// # Errors
    ///
    /// [`BondError::InvalidInput`] or [`BondError::InvalidSchedule`] as for
    /// [`generate_cashflows`].
    pub fn new(face: f64, coupon_rate: f64, frequency: u32, tenor_years: f64) -> BondResult<Self> {
        validate_terms(face, coupon_rate, frequency, tenor_years)?;
        period_count(frequency, tenor_years)?;

        Ok(Self {
            face,
            coupon_rate,
            frequency,
            tenor_years,
        })
    }

    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> FixedRateBondBuilder {
        FixedRateBondBuilder::new()
    }

    /// Returns the face amount.
    pub fn face(&self) -> f64 {
        self.face
    }

    /// Returns the annual coupon rate (decimal).
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the number of coupon periods per year.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the tenor in years.
    pub fn tenor_years(&self) -> f64 {
        self.tenor_years
    }

    /// Coupon paid each period.
    pub fn coupon_per_period(&self) -> f64 {
        self.coupon_rate * self.face / f64::from(self.frequency)
    }

    /// Number of coupon periods.
    pub fn periods(&self) -> BondResult<u32> {
        period_count(self.frequency, self.tenor_years)
    }

    /// Generates the cash flow schedule.
    pub fn cash_flows(&self) -> BondResult<CashFlowSchedule> {
        generate_cashflows(self.face, self.coupon_rate, self.frequency, self.tenor_years)
    }

    /// Present value against a zero curve.
    pub fn price<C>(&self, curve: &C) -> BondResult<f64>
    where
        C: ZeroCurve + ?Sized,
    {
        pricing::price(
            self.face,
            self.coupon_rate,
            self.frequency,
            self.tenor_years,
            curve,
        )
    }

    /// Present value at a flat yield.
    pub fn price_at_yield(&self, yield_rate: f64) -> BondResult<f64> {
        pricing::price_at_yield(
            self.face,
            self.coupon_rate,
            self.frequency,
            self.tenor_years,
            yield_rate,
        )
    }

    /// Solves the yield that reproduces `market_price`.
    pub fn yield_to_maturity(
        &self,
        market_price: f64,
        solver: &YieldSolver,
    ) -> BondResult<YieldResult> {
        solver.solve(&self.cash_flows()?, market_price, self.frequency)
    }

    /// DV01 at a flat yield.
    pub fn dv01(&self, ytm: f64, bump: f64) -> BondResult<f64> {
        risk::dv01(
            self.face,
            self.coupon_rate,
            self.frequency,
            self.tenor_years,
            ytm,
            bump,
        )
    }

    /// DV01 against a zero curve shifted in parallel.
    pub fn dv01_curve<C>(&self, curve: &C, bump: f64) -> BondResult<f64>
    where
        C: ZeroCurve + ?Sized,
    {
        risk::dv01_curve(
            self.face,
            self.coupon_rate,
            self.frequency,
            self.tenor_years,
            curve,
            bump,
        )
    }

    /// Price, DV01, durations and convexity at a flat yield.
    pub fn risk_metrics(&self, ytm: f64) -> BondResult<RiskMetrics> {
        risk::risk_metrics(
            self.face,
            self.coupon_rate,
            self.frequency,
            self.tenor_years,
            ytm,
        )
    }
}

/// Builder for [`FixedRateBond`].
///
/// Face defaults to 100 and frequency to semi-annual; coupon rate and tenor
/// are required.
#[derive(Debug, Clone, Default)]
pub struct FixedRateBondBuilder {
    face: Option<f64>,
    coupon_rate: Option<f64>,
    frequency: Option<u32>,
    tenor_years: Option<f64>,
}

impl FixedRateBondBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the face amount.
    #[must_use]
    pub fn face(mut self, face: f64) -> Self {
        self.face = Some(face);
        self
    }

    /// Sets the annual coupon rate (decimal).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_percent(mut self, percent: f64) -> Self {
        self.coupon_rate = Some(percent / 100.0);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the tenor in years.
    #[must_use]
    pub fn tenor_years(mut self, tenor_years: f64) -> Self {
        self.tenor_years = Some(tenor_years);
        self
    }

    /// Builds the `FixedRateBond`.
    ///
    /// # Errors
    ///
    /// Returns an error if coupon rate or tenor is missing or any term is
    /// invalid.
    pub fn build(self) -> BondResult<FixedRateBond> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::invalid_input("missing coupon rate"))?;
        let tenor_years = self
            .tenor_years
            .ok_or_else(|| BondError::invalid_input("missing tenor"))?;

        FixedRateBond::new(
            self.face.unwrap_or(100.0),
            coupon_rate,
            self.frequency.unwrap_or(2),
            tenor_years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::DEFAULT_BUMP;
    use approx::assert_relative_eq;
    use fixflow_curves::{FlatCurve, PillarCurve};

    fn sample_bond() -> FixedRateBond {
        FixedRateBond::new(1000.0, 0.05, 2, 2.0).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let bond = FixedRateBond::builder()
            .coupon_percent(6.0)
            .tenor_years(5.0)
            .build()
            .unwrap();

        assert_relative_eq!(bond.face(), 100.0);
        assert_eq!(bond.frequency(), 2);
        assert_relative_eq!(bond.coupon_rate(), 0.06);
        assert_relative_eq!(bond.coupon_per_period(), 3.0);
        assert_eq!(bond.periods().unwrap(), 10);
    }

    #[test]
    fn test_builder_missing_fields() {
        assert!(matches!(
            FixedRateBond::builder().tenor_years(5.0).build(),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            FixedRateBond::builder().coupon_rate(0.05).build(),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            FixedRateBond::new(100.0, 0.05, 4, 0.0),
            Err(BondError::InvalidSchedule { .. })
        ));
        assert!(matches!(
            FixedRateBond::new(100.0, -0.05, 2, 5.0),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            FixedRateBond::new(100.0, 0.05, 0, 5.0),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_cash_flows() {
        let flows = sample_bond().cash_flows().unwrap();

        assert_eq!(flows.len(), 4);
        assert_relative_eq!(flows.final_flow().amount(), 1025.0);
    }

    #[test]
    fn test_delegation_matches_free_functions() {
        let bond = sample_bond();
        let curve = PillarCurve::new(vec![0.5, 2.0], vec![0.03, 0.045]).unwrap();

        assert_relative_eq!(
            bond.price(&curve).unwrap(),
            pricing::price(1000.0, 0.05, 2, 2.0, &curve).unwrap()
        );
        assert_relative_eq!(
            bond.price_at_yield(0.04).unwrap(),
            bond.price(&FlatCurve::new(0.04)).unwrap()
        );
        assert_relative_eq!(
            bond.dv01(0.04, DEFAULT_BUMP).unwrap(),
            bond.dv01_curve(&FlatCurve::new(0.04), DEFAULT_BUMP).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            bond.risk_metrics(0.04).unwrap().dv01,
            bond.dv01(0.04, DEFAULT_BUMP).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_yield_round_trip() {
        let bond = sample_bond();
        let price = bond.price_at_yield(0.071).unwrap();
        let result = bond.yield_to_maturity(price, &YieldSolver::new()).unwrap();

        assert_relative_eq!(result.yield_value, 0.071, epsilon = 1e-9);
    }

    #[test]
    fn test_serde_round_trip_and_validation() {
        let bond = sample_bond();
        let json = serde_json::to_string(&bond).unwrap();
        assert_eq!(
            json,
            r#"{"face":1000.0,"coupon_rate":0.05,"frequency":2,"tenor_years":2.0}"#
        );

        let back: FixedRateBond = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bond);

        let invalid = r#"{"face":100.0,"coupon_rate":0.05,"frequency":4,"tenor_years":0.0}"#;
        assert!(serde_json::from_str::<FixedRateBond>(invalid).is_err());
    }
}
