use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::inputs::IntoGstDecimal;
use crate::rates::validate_rate;
use crate::types::{GstBreakdown, GstError, TaxMode};

/// Rounds a monetary value to exactly two decimal places, half away from
/// zero. Every output field of a breakdown goes through this independently,
/// which is why the additive invariant carries a 0.01 tolerance.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the breakdown for an amount that excludes GST.
///
/// The amount is treated as the pre-tax base: `gst = amount * rate / 100`,
/// `total = amount + gst`. Pure and infallible for any `Decimal` inputs;
/// range policy is the caller's concern (see [`calculate_gst`]).
pub fn exclusive_breakdown(amount: Decimal, rate: Decimal) -> GstBreakdown {
    let gst_amount = amount * rate / dec!(100);
    let total_amount = amount + gst_amount;

    GstBreakdown {
        original_amount: round_money(amount),
        gst_amount: round_money(gst_amount),
        total_amount: round_money(total_amount),
        rate,
    }
}

/// Computes the breakdown for an amount that already includes GST.
///
/// The amount is treated as the tax-inclusive total:
/// `original = amount / (1 + rate/100)`, `gst = amount - original`.
///
/// A rate of exactly -100% makes the divisor zero; that case returns
/// [`GstError::DivisionUndefined`] rather than panicking. A rate of 0
/// degenerates to `original == total` with zero GST and is not an error.
pub fn inclusive_breakdown(amount: Decimal, rate: Decimal) -> Result<GstBreakdown, GstError> {
    let divisor = Decimal::ONE + rate / dec!(100);
    if divisor.is_zero() {
        return Err(GstError::DivisionUndefined { rate });
    }

    let original_amount = amount / divisor;
    let gst_amount = amount - original_amount;

    Ok(GstBreakdown {
        original_amount: round_money(original_amount),
        gst_amount: round_money(gst_amount),
        total_amount: round_money(amount),
        rate,
    })
}

/// Validated entry point for a full calculation request.
///
/// Accepts anything convertible to `Decimal` for the amount and rate,
/// rejects negative amounts, enforces the `[0, 100]` rate range, and
/// dispatches on the mode. The front end calls this on every confirmed
/// input change and replaces its displayed result wholesale.
pub fn calculate_gst(
    amount: impl IntoGstDecimal,
    rate: impl IntoGstDecimal,
    mode: TaxMode,
) -> Result<GstBreakdown, GstError> {
    let amount = amount.into_gst_decimal()?;
    let rate = rate.into_gst_decimal()?;

    if amount < Decimal::ZERO {
        return Err(GstError::InvalidInput(format!(
            "Amount must be non-negative, got {}",
            amount
        )));
    }
    validate_rate(rate)?;

    let breakdown = match mode {
        TaxMode::Exclusive => exclusive_breakdown(amount, rate),
        // Rate is in [0, 100] here, so the zero-divisor case is unreachable.
        TaxMode::Inclusive => inclusive_breakdown(amount, rate)?,
    };

    tracing::debug!(
        %mode,
        original = %breakdown.original_amount,
        gst = %breakdown.gst_amount,
        total = %breakdown.total_amount,
        "derived GST breakdown"
    );

    Ok(breakdown)
}
