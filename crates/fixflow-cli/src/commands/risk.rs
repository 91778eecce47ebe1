//! Risk command implementation.
//!
//! DV01, durations and convexity at a given yield, or at the yield implied
//! by a market price.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::commands::{validate_bump, validate_price, validate_yield, BondArgs, Context};
use crate::output::{format_price, print_report, KeyValue, Report};

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity (as percentage)
    #[arg(short, long = "yield", group = "level", required_unless_present = "price")]
    pub yield_value: Option<f64>,

    /// Market price; the yield is solved first
    #[arg(short, long, group = "level")]
    pub price: Option<f64>,

    /// DV01 bump in basis points (default: from config, else 1)
    #[arg(long)]
    pub bump: Option<f64>,
}

/// Risk calculation result.
#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub yield_value: f64,
    pub bump_bps: f64,
    pub price: f64,
    /// DV01 at the requested bump.
    pub dv01: f64,
    pub macaulay_duration: f64,
    pub modified_duration: f64,
    pub convexity: f64,
}

impl Report for RiskReport {
    fn title(&self) -> &'static str {
        "Risk Metrics"
    }

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::from_percent("Yield", self.yield_value),
            KeyValue::new("Price", format_price(self.price)),
            KeyValue::from_f64("DV01", self.dv01, 6),
            KeyValue::from_f64("Bump (bps)", self.bump_bps, 4),
            KeyValue::from_f64("Macaulay Duration", self.macaulay_duration, 6),
            KeyValue::from_f64("Modified Duration", self.modified_duration, 6),
            KeyValue::from_f64("Convexity", self.convexity, 6),
        ]
    }

    fn minimal(&self) -> String {
        format!("{:.6}", self.dv01)
    }
}

/// Execute the risk command.
pub fn execute(args: RiskArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond(&ctx.config)?;

    let ytm = match (args.yield_value, args.price) {
        (Some(yield_pct), _) => validate_yield(yield_pct)? / 100.0,
        (None, Some(price)) => {
            let solver = ctx.solver(None, None, None);
            bond.yield_to_maturity(validate_price(price)?, &solver)?
                .yield_value
        }
        (None, None) => anyhow::bail!("either --yield or --price is required"),
    };

    let bump_bps = match args.bump {
        Some(bps) => validate_bump(bps)?,
        None => ctx.config.dv01_bump * 10_000.0,
    };

    let metrics = bond.risk_metrics(ytm)?;
    let dv01 = bond.dv01(ytm, bump_bps / 10_000.0)?;
    info!(ytm, dv01, "computed risk");

    let report = RiskReport {
        yield_value: ytm,
        bump_bps,
        price: metrics.price,
        dv01,
        macaulay_duration: metrics.macaulay_duration,
        modified_duration: metrics.modified_duration,
        convexity: metrics.convexity,
    };

    print_report(&report, ctx.format)
}
