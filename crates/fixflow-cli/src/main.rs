//! Fixflow CLI - Command-line interface for fixed-rate bond analytics.
//!
//! # Usage
//!
//! ```bash
//! # Cash flow schedule
//! fixflow cashflows --coupon 5.0 --tenor 2 --face 1000
//!
//! # Price at a flat yield, or against curve pillars
//! fixflow price --coupon 5.0 --tenor 10 --yield 4.5
//! fixflow price --coupon 5.0 --tenor 10 --curve "1:3.5,5:4.0,10:4.5"
//!
//! # Yield to maturity from price
//! fixflow yield --coupon 5.0 --tenor 10 --price 98.5
//!
//! # DV01, duration and convexity
//! fixflow risk --coupon 5.0 --tenor 10 --yield 4.5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let ctx = Context::load(cli.format, cli.config.as_deref())?;

    match cli.command {
        Commands::Cashflows(args) => commands::cashflows::execute(args, &ctx)?,
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Yield(args) => commands::yield_cmd::execute(args, &ctx)?,
        Commands::Risk(args) => commands::risk::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only command output.
///
/// `-v` selects debug and `-vv` trace; otherwise `RUST_LOG` applies,
/// defaulting to warn.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
