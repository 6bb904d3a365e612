use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the supplied amount already contains GST or not.
///
/// - **Exclusive**: the amount is the pre-tax base; GST is added on top.
/// - **Inclusive**: the amount is a tax-inclusive total; GST is extracted
///   from it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum TaxMode {
    /// GST is added to the supplied amount.
    #[default]
    Exclusive,
    /// GST is already included in the supplied amount.
    Inclusive,
}

impl TaxMode {
    /// The fixed explanatory caption shown alongside results for this mode.
    pub fn explanation(&self) -> &'static str {
        match self {
            TaxMode::Exclusive => {
                "When adding GST to the amount, the calculator adds the GST \
                 percentage to your base amount to get the total."
            }
            TaxMode::Inclusive => {
                "When GST is included in the amount, the calculator extracts \
                 the original amount and GST component from your total."
            }
        }
    }
}

/// Detailed breakdown of a GST calculation.
///
/// All three monetary fields are independently rounded to two decimal
/// places (half away from zero), so `original_amount + gst_amount` matches
/// `total_amount` within a 0.01 tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// The pre-tax base amount.
    pub original_amount: Decimal,
    /// The GST component.
    pub gst_amount: Decimal,
    /// Base plus GST.
    pub total_amount: Decimal,
    /// The rate (percent) the breakdown was derived with, echoed back.
    pub rate: Decimal,
}

impl GstBreakdown {
    /// The all-zero breakdown used when no amount has been entered.
    pub fn zero(rate: Decimal) -> Self {
        GstBreakdown {
            original_amount: Decimal::ZERO,
            gst_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            rate,
        }
    }

    /// Returns the total formatted as a plain string with 2 decimal places.
    pub fn format_total(&self) -> String {
        use rust_decimal::RoundingStrategy;
        let rounded = self
            .total_amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Returns a concise one-line summary.
    /// Format: "Base: {base} | GST ({rate}%): {gst} | Total: {total}"
    pub fn summary(&self) -> String {
        format!(
            "Base: {:.2} | GST ({}%): {:.2} | Total: {:.2}",
            self.original_amount, self.rate, self.gst_amount, self.total_amount
        )
    }
}

impl std::fmt::Display for GstBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Errors produced by the calculation module.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GstError {
    /// Non-numeric, non-finite, or negative input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate outside the supported `[0, 100]` percent range.
    #[error("Rate {rate}% is outside the supported range 0-100")]
    RateOutOfRange { rate: Decimal },

    /// Inclusive extraction at a rate of -100% has a zero divisor.
    #[error("Cannot extract GST at a rate of {rate}%: divisor is zero")]
    DivisionUndefined { rate: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_breakdown_echoes_rate() {
        let b = GstBreakdown::zero(dec!(18));
        assert_eq!(b.original_amount, Decimal::ZERO);
        assert_eq!(b.gst_amount, Decimal::ZERO);
        assert_eq!(b.total_amount, Decimal::ZERO);
        assert_eq!(b.rate, dec!(18));
    }

    #[test]
    fn summary_renders_all_three_figures() {
        let b = GstBreakdown {
            original_amount: dec!(1000),
            gst_amount: dec!(180),
            total_amount: dec!(1180),
            rate: dec!(18),
        };
        assert_eq!(b.summary(), "Base: 1000.00 | GST (18%): 180.00 | Total: 1180.00");
    }

    #[test]
    fn mode_captions_differ() {
        assert_ne!(
            TaxMode::Exclusive.explanation(),
            TaxMode::Inclusive.explanation()
        );
    }

    #[test]
    fn breakdown_serializes_round_trip() {
        let b = GstBreakdown {
            original_amount: dec!(100),
            gst_amount: dec!(5),
            total_amount: dec!(105),
            rate: dec!(5),
        };
        let json = serde_json::to_string(&b).unwrap();
        let back: GstBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
