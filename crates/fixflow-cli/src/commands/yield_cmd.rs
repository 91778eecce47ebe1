//! Yield command implementation.

use anyhow::Result;
use clap::Args;
use fixflow_bonds::YieldResult;
use fixflow_math::solvers::SolverMethod;
use serde::Serialize;
use tracing::info;

use crate::commands::{validate_price, BondArgs, Context};
use crate::output::{format_percent, print_report, print_warning, KeyValue, Report};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Market price (same units as face)
    #[arg(short, long)]
    pub price: f64,

    /// Solver tolerance (default: from config, else 1e-10)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum iterations per solver phase (default: from config, else 100)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Newton starting yield (as percentage; default: from config, else 3)
    #[arg(long)]
    pub guess: Option<f64>,
}

/// Yield calculation result.
///
/// Flat fields only, so the CSV writer can serialize it.
#[derive(Debug, Serialize)]
pub struct YieldReport {
    pub market_price: f64,
    pub yield_value: f64,
    pub method: SolverMethod,
    pub iterations: u32,
    pub residual: f64,
    /// Why Newton-Raphson handed off to bisection, if it did.
    pub handoff: Option<String>,
}

impl YieldReport {
    fn new(market_price: f64, result: YieldResult) -> Self {
        Self {
            market_price,
            yield_value: result.yield_value,
            method: result.method,
            iterations: result.iterations,
            residual: result.residual,
            handoff: result.handoff,
        }
    }
}

impl Report for YieldReport {
    fn title(&self) -> &'static str {
        "Yield to Maturity"
    }

    fn rows(&self) -> Vec<KeyValue> {
        let mut rows = vec![
            KeyValue::from_f64("Price (Input)", self.market_price, 6),
            KeyValue::from_percent("Yield to Maturity", self.yield_value),
            KeyValue::new("Method", self.method.to_string()),
            KeyValue::new("Iterations", self.iterations.to_string()),
            KeyValue::new("Residual", format!("{:.2e}", self.residual)),
        ];
        if let Some(ref handoff) = self.handoff {
            rows.push(KeyValue::new("Newton Handoff", handoff.clone()));
        }
        rows
    }

    fn minimal(&self) -> String {
        format!("{:.10}", self.yield_value)
    }
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond(&ctx.config)?;
    let market_price = validate_price(args.price)?;
    let solver = ctx.solver(args.tolerance, args.max_iterations, args.guess);

    let result = bond.yield_to_maturity(market_price, &solver)?;
    info!(
        ytm = result.yield_value,
        method = %result.method,
        iterations = result.iterations,
        "solved yield"
    );

    if let Some(ref handoff) = result.handoff {
        print_warning(&format!(
            "Newton-Raphson gave up ({handoff}); yield {} found by bisection",
            format_percent(result.yield_value)
        ));
    }

    let report = YieldReport::new(market_price, result);

    print_report(&report, ctx.format)
}
