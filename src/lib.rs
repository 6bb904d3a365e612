pub mod calculator;
pub mod i18n;
pub mod inputs;
pub mod prelude;
pub mod rates;
pub mod types;

pub use calculator::{calculate_gst, exclusive_breakdown, inclusive_breakdown};
pub use i18n::{CurrencyFormatter, GstLocale};
pub use rates::{is_valid_rate, standard_rates, GstSlab, STANDARD_RATES};
pub use types::{GstBreakdown, GstError, TaxMode};
