use colored::Colorize;
use inquire::{Confirm, CustomType, Select};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use gst::prelude::*;

/// Runs the interactive calculator loop.
///
/// Each round collects an amount, a rate, and the mode, then renders the
/// freshly computed breakdown wholesale. Invalid keystrokes are handled by
/// the prompt validators, so the library only ever sees confirmed input.
pub fn run_calculator_loop(locale: GstLocale) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}", "GST RATE CALCULATOR".bright_cyan().bold());
    println!(
        "{}",
        "Calculate GST amounts based on your input values.".dimmed()
    );
    println!("{}", "You can press Ctrl+C at any time to exit.".dimmed());
    println!();

    // Validator for non-negative amounts, mirroring the text-field filter.
    let non_negative = |input: &Decimal| {
        if *input < Decimal::ZERO {
            Ok(inquire::validator::Validation::Invalid(
                inquire::validator::ErrorMessage::Custom(
                    "Amount must be non-negative".to_string(),
                ),
            ))
        } else {
            Ok(inquire::validator::Validation::Valid)
        }
    };

    loop {
        let amount: Decimal = CustomType::new("Amount (₹):")
            .with_placeholder("e.g. 1000.00")
            .with_error_message("Please enter a valid number")
            .with_validator(non_negative)
            .prompt()?;

        let rate = prompt_rate()?;

        let inclusive = Confirm::new("Is GST already included in this amount?")
            .with_default(false)
            .with_help_message("No: GST is added on top. Yes: GST is extracted from the total.")
            .prompt()?;
        let mode = if inclusive {
            TaxMode::Inclusive
        } else {
            TaxMode::Exclusive
        };

        match calculate_gst(amount, rate, mode) {
            Ok(breakdown) => print_breakdown(&breakdown, mode, locale),
            Err(e) => println!("{}", e.to_string().red()),
        }

        if !Confirm::new("Calculate another?")
            .with_default(true)
            .prompt()?
        {
            break;
        }
    }

    Ok(())
}

/// Prompts for a rate: one of the four standard slabs, or a custom value
/// validated to the supported 0-100 range.
fn prompt_rate() -> Result<Decimal, Box<dyn std::error::Error>> {
    let slabs: Vec<GstSlab> = GstSlab::iter().collect();
    let mut options: Vec<String> = slabs
        .iter()
        .map(|s| format!("{}% - {}", s.rate(), s.describes()))
        .collect();
    options.push("Custom".to_string());

    let choice = Select::new("GST rate:", options).raw_prompt()?;

    if choice.index < slabs.len() {
        return Ok(slabs[choice.index].rate());
    }

    let in_range = |input: &Decimal| {
        if is_valid_rate(*input) {
            Ok(inquire::validator::Validation::Valid)
        } else {
            Ok(inquire::validator::Validation::Invalid(
                inquire::validator::ErrorMessage::Custom(
                    "Rate must be between 0 and 100".to_string(),
                ),
            ))
        }
    };

    let rate: Decimal = CustomType::new("Custom rate (%):")
        .with_placeholder("e.g. 7.5")
        .with_error_message("Please enter a valid number")
        .with_validator(in_range)
        .prompt()?;
    Ok(rate)
}

/// Renders a breakdown the way the form displays it: three currency lines
/// plus the fixed caption for the active mode.
pub fn print_breakdown(breakdown: &GstBreakdown, mode: TaxMode, locale: GstLocale) {
    let base_label = match mode {
        TaxMode::Inclusive => "Original Amount (excluding GST):",
        TaxMode::Exclusive => "Base Amount:",
    };

    println!();
    println!("{}", "Calculation Results".bright_yellow().bold());
    println!(
        "  {:<34} {}",
        base_label,
        locale.format_currency(breakdown.original_amount).green()
    );
    println!(
        "  {:<34} {}",
        format!("GST Amount ({}%):", breakdown.rate),
        locale.format_currency(breakdown.gst_amount).green()
    );
    println!(
        "  {:<34} {}",
        "Total Amount:",
        locale
            .format_currency(breakdown.total_amount)
            .bright_green()
            .bold()
    );
    println!();
    println!("{}", mode.explanation().dimmed());
    println!();

    tracing::debug!(total = %breakdown.format_total(), "rendered breakdown");
}
