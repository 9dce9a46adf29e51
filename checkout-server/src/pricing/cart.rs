//! Cart aggregation
//!
//! Sums cart lines into an item total so callers can send a cart instead of a
//! pre-computed total.

use rust_decimal::Decimal;
use shared::models::{CartLine, PricingResult};

use super::calculator::price_validated;
use super::error::PricingError;
use super::money::{MAX_AMOUNT, MAX_DISTANCE_KM, non_negative, to_decimal};
use super::tariff::TariffConfig;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Sum `price × quantity` over all lines
pub fn item_total(lines: &[CartLine]) -> Result<Decimal, PricingError> {
    let mut total = Decimal::ZERO;
    for (idx, line) in lines.iter().enumerate() {
        let price = non_negative(&format!("items[{}].price", idx), line.price, MAX_AMOUNT)?;
        if line.quantity <= 0 || line.quantity > MAX_QUANTITY {
            return Err(PricingError::invalid(
                &format!("items[{}].quantity", idx),
                format!(
                    "quantity must be between 1 and {}, got {}",
                    MAX_QUANTITY, line.quantity
                ),
            ));
        }
        total += price * Decimal::from(line.quantity);
    }

    if total > to_decimal(MAX_AMOUNT) {
        return Err(PricingError::invalid(
            "items",
            format!("cart total exceeds maximum allowed ({})", MAX_AMOUNT),
        ));
    }
    Ok(total)
}

/// Price a cart against a resolved tariff
pub fn compute_for_cart(
    lines: &[CartLine],
    distance_km: f64,
    tariff: &TariffConfig,
) -> Result<PricingResult, PricingError> {
    let total = item_total(lines)?;
    let distance_km = non_negative("distanceKm", distance_km, MAX_DISTANCE_KM)?;
    Ok(price_validated(total, distance_km, tariff))
}
