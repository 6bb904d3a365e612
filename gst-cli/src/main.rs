//! # GST CLI - Interactive GST Breakdown Calculator
//!
//! A terminal front end over the `gst` library: feed it an amount, a rate,
//! and whether GST is already included, and it renders the base, GST, and
//! total amounts in Indian-numbering currency format.
//!
//! ## Usage
//! ```bash
//! # Run the interactive calculator
//! gst-cli
//!
//! # One-shot: add 18% GST to 1000
//! gst-cli --amount 1000
//!
//! # One-shot: extract 18% GST from an inclusive total
//! gst-cli --amount 1180 --inclusive
//!
//! # Machine-readable output
//! gst-cli --amount 1000 --rate 12 --json
//! ```

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use gst::prelude::*;

mod wizard;

/// Interactive GST breakdown calculator
#[derive(Parser, Debug)]
#[command(name = "gst-cli")]
#[command(author = "gstrs contributors")]
#[command(version)]
#[command(about = "Derive base, GST, and total amounts from any amount", long_about = None)]
struct Args {
    /// Amount to calculate for (omit to run interactively)
    #[arg(long)]
    amount: Option<Decimal>,

    /// GST rate in percent (0-100)
    #[arg(long, default_value = "18")]
    rate: Decimal,

    /// Treat the amount as already including GST
    #[arg(long, default_value = "false")]
    inclusive: bool,

    /// Output the breakdown as JSON (non-interactive mode)
    #[arg(long, default_value = "false")]
    json: bool,

    /// Display locale (en-IN or hi-IN)
    #[arg(long, default_value = "en-IN")]
    locale: GstLocale,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = if args.inclusive {
        TaxMode::Inclusive
    } else {
        TaxMode::Exclusive
    };

    match args.amount {
        Some(amount) => {
            debug!(%amount, rate = %args.rate, %mode, "one-shot calculation");
            let breakdown = calculate_gst(amount, args.rate, mode)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                wizard::print_breakdown(&breakdown, mode, args.locale);
            }
        }
        None => wizard::run_calculator_loop(args.locale)?,
    }

    Ok(())
}
