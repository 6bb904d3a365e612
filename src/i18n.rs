use rust_decimal::Decimal;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fixed_decimal::FixedDecimal;
use icu::decimal::{options::FixedDecimalFormatterOptions, FixedDecimalFormatter};
use icu::locid::Locale;
use writeable::Writeable;

use crate::calculator::round_money;

/// Supported display locales.
///
/// Both map to INR; the display currency never varies with the runtime
/// environment. The locale and currency code are fixed parameters of the
/// formatter value, which keeps `format_currency` pure and deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum GstLocale {
    #[default]
    EnIN,
    HiIN,
}

impl GstLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            GstLocale::EnIN => "en-IN",
            GstLocale::HiIN => "hi-IN",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        self.as_str().parse().expect("Valid BCP-47 locale")
    }

    pub fn currency_code(&self) -> &'static str {
        "INR"
    }
}

impl FromStr for GstLocale {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-IN" | "en" => Ok(GstLocale::EnIN),
            "hi-IN" | "hi" => Ok(GstLocale::HiIN),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Trait for rendering monetary values as display strings.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

impl CurrencyFormatter for GstLocale {
    /// Formats with exactly two fractional digits and Indian numbering
    /// grouping (lakh/crore), e.g. `₹1,23,456.79`.
    fn format_currency(&self, amount: Decimal) -> String {
        let locale = self.to_icu_locale();

        // Grouping comes from ICU4X compiled CLDR data for the locale;
        // en-IN and hi-IN both carry the 3;2 Indian grouping sizes.
        let options = FixedDecimalFormatterOptions::default();
        let formatter = FixedDecimalFormatter::try_new(&locale.into(), options)
            .expect("Failed to create ICU formatter with compiled data");

        // Round first so the string always carries exactly two fractional
        // digits, then hand the digits to ICU for grouping.
        let amount_str = format!("{:.2}", round_money(amount));
        let fixed_decimal =
            FixedDecimal::from_str(&amount_str).unwrap_or_else(|_| FixedDecimal::from(0));

        let formatted_number = formatter.format(&fixed_decimal);
        let number_str = formatted_number.write_to_string().into_owned();

        // ICU4X stable has no currency formatter yet; the rupee sign is a
        // fixed prefix for both supported locales.
        format!("₹{}", number_str)
    }
}
