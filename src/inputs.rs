use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::GstError;

/// Trait for converting various numeric types into `Decimal` for GST
/// calculations.
///
/// This lets callers pass `i32`, `f64`, `&str`, etc. directly into the
/// calculation entry points without wrapping them in `dec!()` or
/// `Decimal::from()`.
pub trait IntoGstDecimal {
    fn into_gst_decimal(self) -> Result<Decimal, GstError>;
}

// Passthrough
impl IntoGstDecimal for Decimal {
    fn into_gst_decimal(self) -> Result<Decimal, GstError> {
        Ok(self)
    }
}

macro_rules! impl_into_gst_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoGstDecimal for $t {
                fn into_gst_decimal(self) -> Result<Decimal, GstError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_gst_decimal_int!(i32, u32, i64, u64, isize, usize);

// Floats go through `from_f64_retain`, which yields `None` for NaN and
// infinities. `Decimal` itself cannot encode non-finite values, so this is
// the single place the "finite" requirement is discharged.
macro_rules! impl_into_gst_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoGstDecimal for $t {
                fn into_gst_decimal(self) -> Result<Decimal, GstError> {
                    Decimal::from_f64_retain(self as f64)
                        .ok_or_else(|| GstError::InvalidInput(format!("Invalid float value: {}", self)))
                }
            }
        )*
    };
}

impl_into_gst_decimal_float!(f32, f64);

impl IntoGstDecimal for &str {
    fn into_gst_decimal(self) -> Result<Decimal, GstError> {
        Decimal::from_str(self)
            .map_err(|e| GstError::InvalidInput(format!("Invalid string format: {}", e)))
    }
}

impl IntoGstDecimal for String {
    fn into_gst_decimal(self) -> Result<Decimal, GstError> {
        Decimal::from_str(&self)
            .map_err(|e| GstError::InvalidInput(format!("Invalid string format: {}", e)))
    }
}

/// Filters a raw amount field the way the interactive form does.
///
/// Empty input means "nothing entered yet" and maps to `Ok(None)`; callers
/// render the all-zero breakdown for it. Only optionally-decimal,
/// non-negative digit strings are accepted (digits with at most one `.`),
/// so signs, exponents, and separators are rejected and the caller keeps
/// its previous state unchanged.
pub fn parse_amount(text: &str) -> Result<Option<Decimal>, GstError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut dots = 0usize;
    let shape_ok = trimmed.chars().all(|c| {
        if c == '.' {
            dots += 1;
            dots <= 1
        } else {
            c.is_ascii_digit()
        }
    });
    // "." alone has the right shape but carries no digits.
    if !shape_ok || trimmed == "." {
        return Err(GstError::InvalidInput(format!(
            "Amount must be a non-negative number, got '{}'",
            trimmed
        )));
    }

    // The filter admits "5." and ".5"; normalize both before parsing.
    let mut normalized = trimmed.to_string();
    if normalized.ends_with('.') {
        normalized.pop();
    }
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }

    let value = Decimal::from_str(&normalized)
        .map_err(|e| GstError::InvalidInput(format!("Invalid amount '{}': {}", trimmed, e)))?;
    Ok(Some(value))
}
