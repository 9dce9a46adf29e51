//! Money helpers
//!
//! Amounts enter as `f64`, are checked once, and all arithmetic after that is
//! done on `Decimal`. Rounding happens only when a result field is produced.

use rust_decimal::prelude::*;

use super::error::PricingError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted amount or fee (1,000,000,000 currency units)
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Largest accepted delivery distance
pub const MAX_DISTANCE_KM: f64 = 100_000.0;

/// Convert a validated f64 to Decimal
///
/// Finite values too small for Decimal's 28-place scale (below ~1e-28)
/// become zero, which rounds to the same two-place output.
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to exactly two decimal places (half-up), keeping trailing zeros
#[inline]
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Check a non-negative, finite input bounded by `max` and convert it
pub(crate) fn non_negative(field: &str, value: f64, max: f64) -> Result<Decimal, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid(
            field,
            format!("{} must be a finite number, got {}", field, value),
        ));
    }
    if value < 0.0 {
        return Err(PricingError::invalid(
            field,
            format!("{} must be non-negative, got {}", field, value),
        ));
    }
    if value > max {
        return Err(PricingError::invalid(
            field,
            format!("{} exceeds maximum allowed ({}), got {}", field, max, value),
        ));
    }
    Ok(to_decimal(value))
}

/// Check a percentage in [0, 100] and convert it
pub(crate) fn percentage(field: &str, value: f64) -> Result<Decimal, PricingError> {
    if value.is_finite() && value > 100.0 {
        return Err(PricingError::invalid(
            field,
            format!("{} must be between 0 and 100, got {}", field, value),
        ));
    }
    non_negative(field, value, 100.0)
}

/// `value * pct / 100`
#[inline]
pub(crate) fn percent_of(value: Decimal, pct: Decimal) -> Decimal {
    value * pct / Decimal::ONE_HUNDRED
}
