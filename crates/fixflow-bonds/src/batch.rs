//! Batch pricing over many bonds.
//!
//! Every bond is priced or solved independently, so results come back in
//! input order with one `Result` per bond. With the `parallel` feature the
//! work is spread over the rayon thread pool.

use fixflow_curves::ZeroCurve;

use crate::error::BondResult;
use crate::instruments::FixedRateBond;
use crate::pricing::{YieldResult, YieldSolver};
use crate::risk::RiskMetrics;

/// Maps `f` over `items`, in parallel when the `parallel` feature is enabled.
fn batch_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}

/// Prices each bond against the same curve.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::batch::price_many;
/// use fixflow_bonds::instruments::FixedRateBond;
/// use fixflow_curves::FlatCurve;
///
/// let bonds = vec![
///     FixedRateBond::new(100.0, 0.04, 2, 5.0).unwrap(),
///     FixedRateBond::new(100.0, 0.06, 2, 5.0).unwrap(),
/// ];
/// let prices = price_many(&bonds, &FlatCurve::new(0.05));
///
/// assert!(prices[0].as_ref().unwrap() < prices[1].as_ref().unwrap());
/// ```
pub fn price_many<C>(bonds: &[FixedRateBond], curve: &C) -> Vec<BondResult<f64>>
where
    C: ZeroCurve + Sync + ?Sized,
{
    batch_map(bonds, |bond| bond.price(curve))
}

/// Solves the yield of each `(bond, market price)` pair.
pub fn solve_ytm_many(
    quotes: &[(FixedRateBond, f64)],
    solver: &YieldSolver,
) -> Vec<BondResult<YieldResult>> {
    batch_map(quotes, |(bond, market_price)| {
        bond.yield_to_maturity(*market_price, solver)
    })
}

/// Computes risk metrics for each `(bond, yield)` pair.
pub fn risk_many(positions: &[(FixedRateBond, f64)]) -> Vec<BondResult<RiskMetrics>> {
    batch_map(positions, |(bond, ytm)| bond.risk_metrics(*ytm))
}
