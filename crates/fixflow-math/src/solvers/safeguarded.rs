//! Safeguarded Newton-Raphson root-finding.
//!
//! Runs Newton-Raphson inside an open interval and hands off to bisection
//! over the same interval as soon as Newton leaves it, breaks down on its
//! derivative, or runs out of iterations.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverMethod, SolverResult};

/// Result of a safeguarded solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeguardedResult {
    /// The root found.
    pub root: f64,
    /// Iterations used by the method that produced the root.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
    /// The method that produced the root.
    pub method: SolverMethod,
    /// Why Newton gave up, when bisection produced the root.
    pub handoff: Option<MathError>,
}

impl SafeguardedResult {
    fn from_solver(result: SolverResult, method: SolverMethod, handoff: Option<MathError>) -> Self {
        Self {
            root: result.root,
            iterations: result.iterations,
            residual: result.residual,
            method,
            handoff,
        }
    }

    /// Returns true if Newton failed and bisection produced the root.
    pub fn used_fallback(&self) -> bool {
        self.handoff.is_some()
    }
}

/// Solver phases. Each transition consumes the previous phase.
#[derive(Debug)]
enum Phase {
    Newton,
    Bisection { handoff: MathError },
    Converged(SafeguardedResult),
    Failed(MathError),
}

/// Safeguarded Newton-Raphson root-finding.
///
/// # Strategy
///
/// 1. Newton-Raphson from `initial_guess`, every iterate confined to the open
///    interval `bracket`
/// 2. On a domain exit, a zero or non-finite derivative, or exhausted
///    iterations, bisection over `bracket`
/// 3. Bisection either shrinks the bracket below tolerance or fails
///
/// An initial guess outside the open bracket goes straight to bisection.
/// Both phases get the full `config.max_iterations` budget.
///
/// # Errors
///
/// Only bisection errors escape:
///
/// - [`MathError::InvalidBracket`] when `f` has no sign change over `bracket`
/// - [`MathError::ConvergenceFailed`] when bisection exhausts its iterations
/// - [`MathError::InvalidInput`] when `f` is not finite at the bracket ends
///
/// # Example
///
/// ```rust
/// use fixflow_math::solvers::{safeguarded, SolverConfig, SolverMethod};
///
/// // Decreasing function with a root at 0.04
/// let f = |x: f64| (1.0 + x).powi(-10) - 1.04f64.powi(-10);
/// let df = |x: f64| -10.0 * (1.0 + x).powi(-11);
///
/// let result = safeguarded(f, df, 0.03, (0.0, 1.0), &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.04).abs() < 1e-8);
/// assert_eq!(result.method, SolverMethod::Newton);
/// ```
pub fn safeguarded<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bracket: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SafeguardedResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lower, upper) = bracket;
    let mut phase = Phase::Newton;

    loop {
        phase = match phase {
            Phase::Newton => newton_phase(&f, &df, initial_guess, bracket, config),
            Phase::Bisection { handoff } => {
                trace!("bisection over [{lower}, {upper}]");
                match bisection(&f, lower, upper, config) {
                    Ok(result) => {
                        debug!(
                            "bisection converged to {} after {} iterations",
                            result.root, result.iterations
                        );
                        Phase::Converged(SafeguardedResult::from_solver(
                            result,
                            SolverMethod::Bisection,
                            Some(handoff),
                        ))
                    }
                    Err(e) => Phase::Failed(e),
                }
            }
            Phase::Converged(result) => return Ok(result),
            Phase::Failed(e) => {
                debug!("safeguarded solve failed: {e}");
                return Err(e);
            }
        };
    }
}

fn newton_phase<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    bracket: (f64, f64),
    config: &SolverConfig,
) -> Phase
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lower, upper) = bracket;

    if !(initial_guess > lower && initial_guess < upper) {
        let handoff = MathError::DomainExit {
            value: initial_guess,
            lower,
            upper,
            iterations: 0,
        };
        debug!("initial guess outside bracket, handing off to bisection: {handoff}");
        return Phase::Bisection { handoff };
    }

    match newton_raphson(f, df, initial_guess, Some(bracket), config) {
        Ok(result) => {
            debug!(
                "Newton converged to {} after {} iterations",
                result.root, result.iterations
            );
            Phase::Converged(SafeguardedResult::from_solver(
                result,
                SolverMethod::Newton,
                None,
            ))
        }
        Err(handoff) => {
            debug!("Newton handing off to bisection: {handoff}");
            Phase::Bisection { handoff }
        }
    }
}
