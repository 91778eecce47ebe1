//! Yield-to-maturity solver.
//!
//! Inverts the flat-yield price with a safeguarded Newton-Raphson: Newton
//! runs inside the open bracket `(0, 1)` using the analytic price
//! derivative, and bisection over `[0, 1]` takes over whenever Newton leaves
//! the bracket, hits a degenerate derivative, or runs out of iterations.
//!
//! # Example
//!
//! ```rust
//! use fixflow_bonds::cashflows::generate_cashflows;
//! use fixflow_bonds::pricing::YieldSolver;
//!
//! let schedule = generate_cashflows(100.0, 0.05, 2, 10.0).unwrap();
//! let solver = YieldSolver::new().with_tolerance(1e-12);
//!
//! let result = solver.solve(&schedule, 100.0, 2).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-10);
//! ```

use fixflow_core::CashFlowSchedule;
use fixflow_math::solvers::{
    safeguarded, SolverConfig, SolverMethod, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cashflows::generate_cashflows;
use crate::error::{BondError, BondResult};
use crate::pricing::discounting::discount_at_yield;

/// Default starting yield for Newton-Raphson (3%).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.03;

/// Economically valid yield range. Newton iterates must stay strictly inside
/// it; bisection searches all of it.
pub const YIELD_BRACKET: (f64, f64) = (0.0, 1.0);

/// Result of a yield calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Iterations used by the method that produced the yield.
    pub iterations: u32,
    /// Price residual at the yield.
    pub residual: f64,
    /// Newton-Raphson or the bisection fallback.
    pub method: SolverMethod,
    /// Why Newton handed off, when bisection produced the yield.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff: Option<String>,
}

/// Yield-to-maturity solver.
///
/// Holds the solver settings; each [`solve`](YieldSolver::solve) call keeps
/// its iteration state on the stack, so one solver can be shared across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    /// Default initial guess: 3%
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Sets the price tolerance.
    ///
    /// Newton stops when `|price(y) - market_price|` is below it; bisection
    /// stops when its bracket is narrower than it.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration cap, applied to each phase.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the Newton starting yield.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Replaces tolerance and iteration cap.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the tolerance.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.config.max_iterations
    }

    /// Returns the Newton starting yield.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    fn validate(&self, market_price: f64, frequency: u32) -> BondResult<()> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(BondError::invalid_input(format!(
                "market price must be positive and finite, got {market_price}"
            )));
        }
        if !self.config.tolerance.is_finite() || self.config.tolerance <= 0.0 {
            return Err(BondError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.config.tolerance
            )));
        }
        if self.config.max_iterations == 0 {
            return Err(BondError::invalid_input(
                "max iterations must be at least 1",
            ));
        }
        if !self.initial_guess.is_finite() {
            return Err(BondError::invalid_input(format!(
                "initial guess must be finite, got {}",
                self.initial_guess
            )));
        }
        if frequency == 0 {
            return Err(BondError::invalid_input(
                "frequency must be a positive number of periods per year",
            ));
        }
        Ok(())
    }

    /// Solves for the flat yield that prices `schedule` at `market_price`.
    ///
    /// # Errors
    ///
    /// - [`BondError::InvalidInput`] for a non-positive price, tolerance,
    ///   iteration cap or frequency
    /// - [`BondError::DidNotConverge`] when bisection runs out of iterations
    ///   or `market_price` is not attainable by any yield in `[0, 1]`
    pub fn solve(
        &self,
        schedule: &CashFlowSchedule,
        market_price: f64,
        frequency: u32,
    ) -> BondResult<YieldResult> {
        self.validate(market_price, frequency)?;

        let objective = |y: f64| discount_at_yield(schedule, y, frequency).pv - market_price;
        let derivative = |y: f64| discount_at_yield(schedule, y, frequency).dpv_dy;

        let result = safeguarded(
            objective,
            derivative,
            self.initial_guess,
            YIELD_BRACKET,
            &self.config,
        )
        .map_err(|e| {
            debug!("yield solve failed for price {market_price}: {e}");
            BondError::did_not_converge(e)
        })?;

        debug!(
            "yield {:.10} for price {market_price} via {} in {} iterations",
            result.root, result.method, result.iterations
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
            method: result.method,
            handoff: result.handoff.map(|e| e.to_string()),
        })
    }
}

/// Solves for yield-to-maturity from instrument terms.
///
/// Builds the schedule and runs a [`YieldSolver`] with the given settings.
///
/// # Example
///
/// ```rust
/// use fixflow_bonds::pricing::{price_at_yield, solve_ytm};
///
/// let market_price = price_at_yield(100.0, 0.04, 2, 7.0, 0.055).unwrap();
/// let ytm = solve_ytm(market_price, 100.0, 0.04, 2, 7.0, 1e-10, 100, 0.03).unwrap();
/// assert!((ytm - 0.055).abs() < 1e-9);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn solve_ytm(
    market_price: f64,
    face: f64,
    coupon_rate: f64,
    frequency: u32,
    tenor_years: f64,
    tolerance: f64,
    max_iterations: u32,
    initial_guess: f64,
) -> BondResult<f64> {
    let schedule = generate_cashflows(face, coupon_rate, frequency, tenor_years)?;

    YieldSolver::new()
        .with_tolerance(tolerance)
        .with_max_iterations(max_iterations)
        .with_initial_guess(initial_guess)
        .solve(&schedule, market_price, frequency)
        .map(|result| result.yield_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_at_yield;
    use approx::assert_relative_eq;
    use fixflow_math::MathError;

    #[test]
    fn test_par_bond_yield() {
        let ytm = solve_ytm(100.0, 100.0, 0.05, 2, 10.0, 1e-10, 100, 0.03).unwrap();
        assert_relative_eq!(ytm, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_newton_path_from_good_guess() {
        let schedule = generate_cashflows(100.0, 0.06, 2, 5.0).unwrap();
        let price = price_at_yield(100.0, 0.06, 2, 5.0, 0.07).unwrap();

        let result = YieldSolver::new()
            .with_initial_guess(0.065)
            .solve(&schedule, price, 2)
            .unwrap();

        assert_eq!(result.method, SolverMethod::Newton);
        assert!(result.handoff.is_none());
        assert!(result.residual.abs() < 1e-10);
        assert_relative_eq!(result.yield_value, 0.07, epsilon = 1e-10);
    }

    #[test]
    fn test_poor_guess_hands_off_to_bisection() {
        // 30-year bond, true yield 2%, guess 90%: the first Newton step leaves (0, 1)
        let schedule = generate_cashflows(100.0, 0.05, 2, 30.0).unwrap();
        let price = price_at_yield(100.0, 0.05, 2, 30.0, 0.02).unwrap();
        let solver = YieldSolver::new().with_initial_guess(0.9);

        let result = solver.solve(&schedule, price, 2).unwrap();

        assert_eq!(result.method, SolverMethod::Bisection);
        assert!(result.handoff.is_some());
        assert!((result.yield_value - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_price_above_undiscounted_total_does_not_converge() {
        // No non-negative yield can price above the sum of the flows
        let schedule = generate_cashflows(100.0, 0.05, 1, 2.0).unwrap();

        match YieldSolver::new().solve(&schedule, 120.0, 1) {
            Err(BondError::DidNotConverge { source }) => {
                assert!(matches!(source, MathError::InvalidBracket { .. }));
            }
            other => panic!("expected DidNotConverge, got {other:?}"),
        }
    }

    #[test]
    fn test_price_below_bracket_does_not_converge() {
        // Even at 100% yield a 1-year zero is worth 50
        let schedule = generate_cashflows(100.0, 0.0, 1, 1.0).unwrap();
        let result = YieldSolver::new().solve(&schedule, 10.0, 1);

        assert!(matches!(result, Err(BondError::DidNotConverge { .. })));
    }

    #[test]
    fn test_bisection_iteration_cap_is_an_error() {
        // Newton cannot converge in 3 steps at this tolerance, nor can bisection
        let schedule = generate_cashflows(100.0, 0.05, 2, 30.0).unwrap();
        let price = price_at_yield(100.0, 0.05, 2, 30.0, 0.02).unwrap();

        let result = YieldSolver::new()
            .with_initial_guess(0.9)
            .with_max_iterations(3)
            .solve(&schedule, price, 2);

        match result {
            Err(BondError::DidNotConverge { source }) => {
                assert!(matches!(source, MathError::ConvergenceFailed { iterations: 3, .. }));
            }
            other => panic!("expected DidNotConverge, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_solver_inputs() {
        let schedule = generate_cashflows(100.0, 0.05, 2, 5.0).unwrap();

        for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                YieldSolver::new().solve(&schedule, price, 2),
                Err(BondError::InvalidInput { .. })
            ));
        }
        assert!(matches!(
            YieldSolver::new().with_tolerance(0.0).solve(&schedule, 99.0, 2),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            YieldSolver::new().with_max_iterations(0).solve(&schedule, 99.0, 2),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            YieldSolver::new().with_initial_guess(f64::NAN).solve(&schedule, 99.0, 2),
            Err(BondError::InvalidInput { .. })
        ));
        assert!(matches!(
            YieldSolver::new().solve(&schedule, 99.0, 0),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_solver_settings() {
        let solver = YieldSolver::new()
            .with_tolerance(1e-8)
            .with_max_iterations(50)
            .with_initial_guess(0.05);

        assert_relative_eq!(solver.tolerance(), 1e-8);
        assert_eq!(solver.max_iterations(), 50);
        assert_relative_eq!(solver.initial_guess(), 0.05);
        assert_eq!(YieldSolver::default(), YieldSolver::new());
    }

    #[test]
    fn test_yield_result_serde() {
        let result = YieldResult {
            yield_value: 0.05,
            iterations: 4,
            residual: 1e-12,
            method: SolverMethod::Newton,
            handoff: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""method":"newton""#));
        assert!(!json.contains("handoff"));
    }
}
