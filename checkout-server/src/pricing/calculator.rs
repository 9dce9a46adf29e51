//! Checkout Total Calculator
//!
//! Turns an item total, a delivery distance and a tariff into an itemized
//! payable breakdown.
//!
//! # Calculation Steps
//!
//! 1. Full delivery fee: base fee, plus `extraPerKm` for every km past `minDistance`
//! 2. Orders strictly above `freeDeliveryThreshold` pay `deliveryFeeFreePercentage`% of it
//! 3. Orders at or above `minOrderValue` get `flatDiscount`; orders below pay `smallOrderFee`
//! 4. Packaging fee is always charged
//! 5. GST and service tax are taken independently from the same subtotal
//!
//! Intermediate values keep full decimal precision; every output field is
//! rounded half-up to two places on its own.

use rust_decimal::Decimal;
use shared::models::{PricingRequest, PricingResult};

use super::error::PricingError;
use super::money::{MAX_AMOUNT, MAX_DISTANCE_KM, non_negative, percent_of, to_money};
use super::tariff::{DeliveryTariff, TariffConfig};

/// Unrounded breakdown, kept for invariant checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub item_total: Decimal,
    pub full_delivery_fee: Decimal,
    pub delivery_fee: Decimal,
    pub delivery_discount: Decimal,
    pub discount: Decimal,
    pub small_order_fee: Decimal,
    pub packaging_fee: Decimal,
    pub sub_total: Decimal,
    pub gst: Decimal,
    pub service_tax: Decimal,
    pub to_pay: Decimal,
}

impl Breakdown {
    /// Everything above the discounted item total
    pub fn taxes_and_charges(&self) -> Decimal {
        self.delivery_fee + self.small_order_fee + self.packaging_fee + self.gst + self.service_tax
    }

    /// Round every field for output
    pub fn to_result(&self) -> PricingResult {
        let delivery_discount = to_money(self.delivery_discount);
        PricingResult {
            to_pay: to_money(self.to_pay),
            item_total: to_money(self.item_total),
            gst: to_money(self.gst),
            service_tax: to_money(self.service_tax),
            discount: to_money(self.discount),
            delivery_fee: to_money(self.delivery_fee),
            delivery_discount: (delivery_discount > Decimal::ZERO).then_some(delivery_discount),
            small_order_fee: to_money(self.small_order_fee),
            packaging_fee: to_money(self.packaging_fee),
            taxes_and_charges: to_money(self.taxes_and_charges()),
        }
    }
}

/// Delivery fee before any free-delivery reduction
pub fn full_delivery_fee(distance_km: Decimal, delivery: &DeliveryTariff) -> Decimal {
    if distance_km <= delivery.min_distance {
        delivery.base_fee
    } else {
        delivery.base_fee + (distance_km - delivery.min_distance) * delivery.extra_per_km
    }
}

/// Compute the unrounded breakdown from already validated inputs
pub fn calculate_breakdown(
    item_total: Decimal,
    distance_km: Decimal,
    tariff: &TariffConfig,
) -> Breakdown {
    let full_delivery_fee = full_delivery_fee(distance_km, &tariff.delivery);

    // Strictly above the threshold; an order exactly at it pays the full fee
    let (delivery_fee, delivery_discount) = if item_total > tariff.delivery.free_delivery_threshold
    {
        let reduced = percent_of(
            full_delivery_fee,
            tariff.delivery.delivery_fee_free_percentage,
        );
        (reduced, full_delivery_fee - reduced)
    } else {
        (full_delivery_fee, Decimal::ZERO)
    };

    // Inclusive: an order exactly at minOrderValue gets the discount and no small-order fee
    let meets_min_order = item_total >= tariff.discount.min_order_value;
    let discount = if meets_min_order {
        tariff.discount.flat_discount
    } else {
        Decimal::ZERO
    };
    let small_order_fee = if meets_min_order {
        Decimal::ZERO
    } else {
        tariff.fees.small_order_fee
    };
    let packaging_fee = tariff.fees.packaging_fee;

    let sub_total = item_total - discount + delivery_fee + small_order_fee + packaging_fee;
    let gst = percent_of(sub_total, tariff.tax.gst_percent);
    let service_tax = percent_of(sub_total, tariff.tax.service_tax);

    Breakdown {
        item_total,
        full_delivery_fee,
        delivery_fee,
        delivery_discount,
        discount,
        small_order_fee,
        packaging_fee,
        sub_total,
        gst,
        service_tax,
        to_pay: sub_total + gst + service_tax,
    }
}

/// Price an order against an already resolved tariff
pub fn compute_with_tariff(
    item_total: f64,
    distance_km: f64,
    tariff: &TariffConfig,
) -> Result<PricingResult, PricingError> {
    let item_total = non_negative("itemTotal", item_total, MAX_AMOUNT)?;
    let distance_km = non_negative("distanceKm", distance_km, MAX_DISTANCE_KM)?;
    Ok(price_validated(item_total, distance_km, tariff))
}

/// Price already validated decimal inputs and log the breakdown
pub(crate) fn price_validated(
    item_total: Decimal,
    distance_km: Decimal,
    tariff: &TariffConfig,
) -> PricingResult {
    let breakdown = calculate_breakdown(item_total, distance_km, tariff);
    tracing::debug!(
        item_total = %breakdown.item_total,
        distance_km = %distance_km,
        delivery_fee = %breakdown.delivery_fee,
        discount = %breakdown.discount,
        sub_total = %breakdown.sub_total,
        to_pay = %breakdown.to_pay,
        "Computed checkout total"
    );

    breakdown.to_result()
}

/// Price a self-contained request (tariff settings included)
pub fn compute_total(request: &PricingRequest) -> Result<PricingResult, PricingError> {
    let tariff = TariffConfig::resolve(&request.tariff)?;
    compute_with_tariff(request.item_total, request.distance_km, &tariff)
}
