//! Pricing configuration types.
//!
//! [`PricingConfig`] carries the solver, risk and instrument defaults that
//! callers would otherwise pass on every call.

use fixflow_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

// =============================================================================
// PRICING CONFIGURATION
// =============================================================================

/// Pricing configuration for fixed-rate bond valuation.
///
/// Every field has a serde default, so a partial TOML or JSON document
/// only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Newton-Raphson residual tolerance and bisection bracket width.
    #[serde(default = "default_solver_tolerance")]
    pub solver_tolerance: f64,

    /// Maximum iterations for each yield solver phase.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Starting yield for Newton-Raphson (decimal).
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// DV01 bump (decimal, 1e-4 is one basis point).
    #[serde(default = "default_dv01_bump")]
    pub dv01_bump: f64,

    /// Default coupon frequency.
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,

    /// Default face amount.
    #[serde(default = "default_face")]
    pub default_face: f64,
}

fn default_solver_tolerance() -> f64 {
    1e-10
}

fn default_max_iterations() -> u32 {
    100
}

fn default_initial_guess() -> f64 {
    0.03
}

fn default_dv01_bump() -> f64 {
    1e-4
}

fn default_frequency() -> u32 {
    2
}

fn default_face() -> f64 {
    100.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            solver_tolerance: default_solver_tolerance(),
            max_iterations: default_max_iterations(),
            initial_guess: default_initial_guess(),
            dv01_bump: default_dv01_bump(),
            default_frequency: default_frequency(),
            default_face: default_face(),
        }
    }
}

impl PricingConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tighter tolerance and a larger iteration budget.
    #[must_use]
    pub fn high_precision() -> Self {
        Self {
            solver_tolerance: 1e-12,
            max_iterations: 200,
            ..Self::default()
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_solver_tolerance(mut self, tolerance: f64) -> Self {
        self.solver_tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the DV01 bump.
    #[must_use]
    pub fn with_dv01_bump(mut self, bump: f64) -> Self {
        self.dv01_bump = bump;
        self
    }

    /// Sets the default coupon frequency.
    #[must_use]
    pub fn with_default_frequency(mut self, frequency: u32) -> Self {
        self.default_frequency = frequency;
        self
    }

    /// Sets the default face amount.
    #[must_use]
    pub fn with_default_face(mut self, face: f64) -> Self {
        self.default_face = face;
        self
    }

    /// Solver settings for the root finder.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.solver_tolerance, self.max_iterations)
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.solver_tolerance > 0.0 && self.solver_tolerance <= 1e-4) {
            errors.push(ValidationError::with_rule(
                "solver_tolerance",
                "Solver tolerance must be between 0 and 1e-4",
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        if !(self.initial_guess.is_finite() && self.initial_guess > 0.0 && self.initial_guess < 1.0)
        {
            errors.push(ValidationError::with_rule(
                "initial_guess",
                "Initial guess must lie strictly between 0 and 1",
                "yield_bracket",
            ));
        }

        if !(self.dv01_bump > 0.0 && self.dv01_bump <= 0.01) {
            errors.push(ValidationError::with_rule(
                "dv01_bump",
                "DV01 bump must be between 0 and 0.01",
                "valid_bump",
            ));
        }

        if self.default_frequency == 0 || self.default_frequency > 365 {
            errors.push(ValidationError::with_rule(
                "default_frequency",
                "Frequency must be between 1 and 365",
                "valid_frequency",
            ));
        }

        if !(self.default_face.is_finite() && self.default_face > 0.0) {
            errors.push(ValidationError::new(
                "default_face",
                "Face must be positive and finite",
            ));
        }

        errors
    }
}
