//! Pricing Models
//!
//! Request and result shapes exchanged with the checkout pricing engine.
//! Inputs arrive as JSON numbers; results leave as fixed two-decimal strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tariff::TariffSettings;

/// Stateless pricing request carrying its own tariff
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Sum of cart line items
    pub item_total: f64,
    /// Kitchen to drop point distance
    pub distance_km: f64,
    pub tariff: TariffSettings,
}

/// A single cart line (单价 × 数量)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub price: f64,
    pub quantity: i32,
}

/// Quote request priced against the stored tariff
///
/// Exactly one of `item_total` / `items` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CartLine>>,
    pub distance_km: f64,
}

/// Itemized payable breakdown
///
/// Every amount is rounded to two decimal places and serialized as a string
/// (`"445.20"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub to_pay: Decimal,
    pub item_total: Decimal,
    pub gst: Decimal,
    pub service_tax: Decimal,
    pub discount: Decimal,
    pub delivery_fee: Decimal,
    /// Only present when the free-delivery reduction applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_discount: Option<Decimal>,
    pub small_order_fee: Decimal,
    pub packaging_fee: Decimal,
    /// deliveryFee + smallOrderFee + packagingFee + gst + serviceTax
    pub taxes_and_charges: Decimal,
}
