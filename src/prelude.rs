//! Prelude module for the GST calculator.
//!
//! Re-exports the commonly used types, traits, and entry points so callers
//! can get the whole surface with a single import.
//!
//! # Usage
//!
//! ```rust
//! use gst::prelude::*;
//! ```

pub use crate::calculator::{
    calculate_gst, exclusive_breakdown, inclusive_breakdown, round_money,
};
pub use crate::i18n::{CurrencyFormatter, GstLocale};
pub use crate::inputs::{parse_amount, IntoGstDecimal};
pub use crate::rates::{is_valid_rate, standard_rates, validate_rate, GstSlab, STANDARD_RATES};
pub use crate::types::{GstBreakdown, GstError, TaxMode};
