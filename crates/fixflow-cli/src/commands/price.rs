//! Price command implementation.
//!
//! Discounts a bond at a flat yield or against zero-curve pillars.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::commands::{parse_curve, validate_yield, BondArgs, Context};
use crate::output::{format_price, print_report, KeyValue, Report};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Flat yield (as percentage)
    #[arg(short, long = "yield", group = "discounting")]
    pub yield_value: Option<f64>,

    /// Zero curve pillars "t:r,t:r,..." (rates as percentage)
    #[arg(long, group = "discounting")]
    pub curve: Option<String>,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub face: f64,
    pub coupon_rate: f64,
    pub frequency: u32,
    pub tenor_years: f64,
    /// "yield" or "curve"
    pub discounting: &'static str,
    pub yield_value: Option<f64>,
    pub price: f64,
    /// Price per 100 face.
    pub price_percent: f64,
}

impl Report for PriceReport {
    fn title(&self) -> &'static str {
        "Bond Pricing Results"
    }

    fn rows(&self) -> Vec<KeyValue> {
        let mut rows = vec![
            KeyValue::from_f64("Face Value", self.face, 2),
            KeyValue::from_percent("Coupon", self.coupon_rate),
            KeyValue::new("Frequency", self.frequency.to_string()),
            KeyValue::from_f64("Tenor (years)", self.tenor_years, 4),
        ];
        match self.yield_value {
            Some(y) => rows.push(KeyValue::from_percent("Yield (Input)", y)),
            None => rows.push(KeyValue::new("Discounting", "Zero curve")),
        }
        rows.push(KeyValue::new("Price", format_price(self.price)));
        rows.push(KeyValue::new("Price (% of face)", format_price(self.price_percent)));
        rows
    }

    fn minimal(&self) -> String {
        format_price(self.price)
    }
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.to_bond(&ctx.config)?;

    let (discounting, yield_value, price) = match (args.yield_value, args.curve.as_deref()) {
        (Some(yield_pct), _) => {
            let ytm = validate_yield(yield_pct)? / 100.0;
            ("yield", Some(ytm), bond.price_at_yield(ytm)?)
        }
        (None, Some(pillars)) => {
            let curve = parse_curve(pillars)?;
            ("curve", None, bond.price(&curve)?)
        }
        // Default: at par (yield = coupon)
        (None, None) => {
            let ytm = bond.coupon_rate();
            ("yield", Some(ytm), bond.price_at_yield(ytm)?)
        }
    };
    info!(price, discounting, "priced bond");

    let report = PriceReport {
        face: bond.face(),
        coupon_rate: bond.coupon_rate(),
        frequency: bond.frequency(),
        tenor_years: bond.tenor_years(),
        discounting,
        yield_value,
        price,
        price_percent: 100.0 * price / bond.face(),
    };

    print_report(&report, ctx.format)
}
