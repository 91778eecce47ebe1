//! CLI command implementations.

pub mod cashflows;
pub mod price;
pub mod risk;
pub mod yield_cmd;

// Re-export submodules for convenience
pub use cashflows::CashflowsArgs;
pub use price::PriceArgs;
pub use risk::RiskArgs;
pub use yield_cmd::YieldArgs;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Args;
use fixflow_bonds::{FixedRateBond, YieldSolver};
use fixflow_config::{load_file, PricingConfig};
use fixflow_curves::PillarCurve;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Pricing defaults, from `--config` or built in.
    pub config: PricingConfig,
}

impl Context {
    /// Loads the pricing configuration file, if one was given.
    pub fn load(format: OutputFormat, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                info!("loading configuration from {}", path.display());
                load_file(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            }
            None => PricingConfig::default(),
        };
        debug!(?config, "pricing configuration");

        Ok(Self { format, config })
    }

    /// Yield solver from the configuration with per-command overrides.
    pub fn solver(
        &self,
        tolerance: Option<f64>,
        max_iterations: Option<u32>,
        guess_percent: Option<f64>,
    ) -> YieldSolver {
        let mut solver = YieldSolver::new()
            .with_config(self.config.solver_config())
            .with_initial_guess(guess_percent.map_or(self.config.initial_guess, |g| g / 100.0));

        if let Some(tolerance) = tolerance {
            solver = solver.with_tolerance(tolerance);
        }
        if let Some(max_iterations) = max_iterations {
            solver = solver.with_max_iterations(max_iterations);
        }
        solver
    }
}

/// Bond terms shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Time to maturity in years
    #[arg(short, long)]
    pub tenor: f64,

    /// Face value (default: from config, else 100)
    #[arg(long)]
    pub face: Option<f64>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long)]
    pub frequency: Option<u32>,
}

impl BondArgs {
    /// Builds the bond, filling face and frequency from the configuration.
    pub fn to_bond(&self, config: &PricingConfig) -> Result<FixedRateBond> {
        let coupon = validate_coupon(self.coupon)?;

        let bond = FixedRateBond::builder()
            .face(self.face.unwrap_or(config.default_face))
            .coupon_percent(coupon)
            .frequency(self.frequency.unwrap_or(config.default_frequency))
            .tenor_years(self.tenor)
            .build()?;
        debug!(?bond, "bond terms");

        Ok(bond)
    }
}

/// Parses `"t:r,t:r,..."` curve pillars, rates in percent.
pub fn parse_curve(input: &str) -> CliResult<PillarCurve> {
    let invalid = |reason: String| CliError::InvalidCurve {
        input: input.to_string(),
        reason,
    };

    let pillars = input
        .split(',')
        .map(str::trim)
        .filter(|pillar| !pillar.is_empty())
        .map(|pillar| {
            let (tenor, rate) = pillar
                .split_once(':')
                .ok_or_else(|| invalid(format!("pillar '{pillar}' has no ':'")))?;
            let tenor: f64 = tenor
                .trim()
                .parse()
                .map_err(|_| invalid(format!("bad tenor '{tenor}'")))?;
            let rate: f64 = rate
                .trim()
                .parse()
                .map_err(|_| invalid(format!("bad rate '{rate}'")))?;
            Ok((tenor, rate / 100.0))
        })
        .collect::<CliResult<Vec<_>>>()?;

    PillarCurve::from_pillars(&pillars).map_err(|e| invalid(e.to_string()))
}

/// Validates a coupon rate.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&coupon) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a yield value.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !(0.0..100.0).contains(&yield_value) {
        return Err(CliError::InvalidYield(yield_value));
    }
    Ok(yield_value)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Validates a DV01 bump in basis points.
pub fn validate_bump(bps: f64) -> CliResult<f64> {
    if !(bps.is_finite() && bps > 0.0) {
        return Err(CliError::InvalidBump(bps));
    }
    Ok(bps)
}
