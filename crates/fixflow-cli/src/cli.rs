//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CashflowsArgs, PriceArgs, RiskArgs, YieldArgs};

/// Fixflow - fixed-rate bond cash flows, pricing, yield and DV01
#[derive(Parser)]
#[command(name = "fixflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Pricing configuration file (.toml or .json)
    #[arg(long, env = "FIXFLOW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the cash flow schedule of a bond
    Cashflows(CashflowsArgs),

    /// Price a bond at a flat yield or against a zero curve
    Price(PriceArgs),

    /// Solve yield to maturity from a market price
    Yield(YieldArgs),

    /// DV01, duration and convexity
    Risk(RiskArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
