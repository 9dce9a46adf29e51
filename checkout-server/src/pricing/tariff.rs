//! Resolved tariff
//!
//! [`TariffConfig`] is the immutable, validated form of [`TariffSettings`].
//! Defaults for `minDistance` and `deliveryFeeFreePercentage` are applied here
//! and nowhere else.

use rust_decimal::Decimal;
use shared::models::{
    DEFAULT_DELIVERY_FEE_FREE_PERCENTAGE, DEFAULT_MIN_DISTANCE_KM, TariffSettings,
};

use super::error::PricingError;
use super::money::{MAX_AMOUNT, MAX_DISTANCE_KM, non_negative, percentage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTariff {
    pub base_fee: Decimal,
    pub extra_per_km: Decimal,
    pub free_delivery_threshold: Decimal,
    pub delivery_fee_free_percentage: Decimal,
    pub min_distance: Decimal,
    pub peak_charge: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountTariff {
    pub flat_discount: Decimal,
    pub min_order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTariff {
    pub gst_percent: Decimal,
    pub service_tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTariff {
    pub small_order_fee: Decimal,
    pub packaging_fee: Decimal,
}

/// Validated tariff used by the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffConfig {
    pub delivery: DeliveryTariff,
    pub discount: DiscountTariff,
    pub tax: TaxTariff,
    pub fees: FeeTariff,
}

fn required(field: &str, value: Option<f64>) -> Result<f64, PricingError> {
    value.ok_or_else(|| PricingError::missing(field))
}

fn amount(field: &str, value: Option<f64>) -> Result<Decimal, PricingError> {
    non_negative(field, required(field, value)?, MAX_AMOUNT)
}

fn rate(field: &str, value: Option<f64>) -> Result<Decimal, PricingError> {
    percentage(field, required(field, value)?)
}

impl TariffConfig {
    /// Validate raw settings and apply documented defaults
    ///
    /// Fields are checked section by section in document order; the first
    /// problem found is returned.
    pub fn resolve(settings: &TariffSettings) -> Result<Self, PricingError> {
        let d = &settings.delivery;
        let delivery = DeliveryTariff {
            base_fee: amount("delivery.baseFee", d.base_fee)?,
            extra_per_km: amount("delivery.extraPerKm", d.extra_per_km)?,
            free_delivery_threshold: amount(
                "delivery.freeDeliveryThreshold",
                d.free_delivery_threshold,
            )?,
            delivery_fee_free_percentage: percentage(
                "delivery.deliveryFeeFreePercentage",
                d.delivery_fee_free_percentage
                    .unwrap_or(DEFAULT_DELIVERY_FEE_FREE_PERCENTAGE),
            )?,
            min_distance: non_negative(
                "delivery.minDistance",
                d.min_distance.unwrap_or(DEFAULT_MIN_DISTANCE_KM),
                MAX_DISTANCE_KM,
            )?,
            peak_charge: d
                .peak_charge
                .map(|v| non_negative("delivery.peakCharge", v, MAX_AMOUNT))
                .transpose()?,
        };

        let discount = DiscountTariff {
            flat_discount: amount("discount.flatDiscount", settings.discount.flat_discount)?,
            min_order_value: amount("discount.minOrderValue", settings.discount.min_order_value)?,
        };

        let tax = TaxTariff {
            gst_percent: rate("tax.gstPercent", settings.tax.gst_percent)?,
            service_tax: rate("tax.serviceTax", settings.tax.service_tax)?,
        };

        let fees = FeeTariff {
            small_order_fee: amount("fees.smallOrderFee", settings.fees.small_order_fee)?,
            packaging_fee: amount("fees.packagingFee", settings.fees.packaging_fee)?,
        };

        Ok(Self {
            delivery,
            discount,
            tax,
            fees,
        })
    }
}

impl TryFrom<&TariffSettings> for TariffConfig {
    type Error = PricingError;

    fn try_from(settings: &TariffSettings) -> Result<Self, Self::Error> {
        Self::resolve(settings)
    }
}
