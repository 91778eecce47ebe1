//! Cashflows command implementation.

use anyhow::Result;
use clap::Args;
use fixflow_core::{CashFlow, CashFlowType};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, Context};
use crate::output::{format_price, print_header, print_output};

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// One row of the schedule.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Period")]
    pub period: usize,
    #[tabled(rename = "Time (y)", display_with = "display_time")]
    pub time: f64,
    #[tabled(rename = "Amount", display_with = "display_amount")]
    pub amount: f64,
    #[tabled(rename = "Type")]
    pub kind: CashFlowType,
}

impl CashFlowRow {
    fn new(period: usize, flow: &CashFlow) -> Self {
        Self {
            period,
            time: flow.time(),
            amount: flow.amount(),
            kind: flow.cf_type(),
        }
    }
}

fn display_time(time: &f64) -> String {
    format!("{time:.4}")
}

fn display_amount(amount: &f64) -> String {
    format_price(*amount)
}

/// Execute the cashflows command.
pub fn execute(args: CashflowsArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond(&ctx.config)?;
    let schedule = bond.cash_flows()?;
    info!(flows = schedule.len(), "generated schedule");

    let rows: Vec<CashFlowRow> = schedule
        .iter()
        .enumerate()
        .map(|(i, flow)| CashFlowRow::new(i + 1, flow))
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header("Cash Flow Schedule");
    }
    print_output(&rows, ctx.format)
}
