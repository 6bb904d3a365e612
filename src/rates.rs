use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::types::GstError;

/// The standard GST rate slabs, in ascending order.
///
/// These drive quick-select affordances only; they are not a whitelist.
/// Any rate in `[0, 100]` is accepted by the validated entry points.
pub const STANDARD_RATES: [Decimal; 4] = [dec!(5), dec!(12), dec!(18), dec!(28)];

/// Returns the standard GST rate slabs `[5, 12, 18, 28]`, in that order.
pub fn standard_rates() -> [Decimal; 4] {
    STANDARD_RATES
}

/// The four standard GST slabs and the kind of goods they typically cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum GstSlab {
    /// 5% - essential goods.
    Essential,
    /// 12% - merit goods.
    Merit,
    /// 18% - the standard rate for most goods and services.
    Standard,
    /// 28% - luxury and sin goods.
    Luxury,
}

impl GstSlab {
    pub fn rate(&self) -> Decimal {
        match self {
            GstSlab::Essential => dec!(5),
            GstSlab::Merit => dec!(12),
            GstSlab::Standard => dec!(18),
            GstSlab::Luxury => dec!(28),
        }
    }

    pub fn describes(&self) -> &'static str {
        match self {
            GstSlab::Essential => "Essential goods",
            GstSlab::Merit => "Merit goods",
            GstSlab::Standard => "Most goods and services",
            GstSlab::Luxury => "Luxury and sin goods",
        }
    }
}

/// True iff `rate` is within the supported `[0, 100]` percent range.
///
/// `Decimal` cannot encode NaN or infinities, so finiteness is guaranteed
/// by the type; only the range is checked here.
pub fn is_valid_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= dec!(100)
}

/// Validates a rate at the module boundary.
pub fn validate_rate(rate: Decimal) -> Result<(), GstError> {
    if is_valid_rate(rate) {
        Ok(())
    } else {
        Err(GstError::RateOutOfRange { rate })
    }
}
