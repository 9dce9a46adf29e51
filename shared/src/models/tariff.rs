//! Tariff Settings Model
//!
//! Raw, persisted shape of the delivery/discount/tax/fee rules. Every field is
//! optional here; the server resolves defaults and rejects missing fields when
//! turning settings into an immutable tariff.

use serde::{Deserialize, Serialize};

/// Default distance (km) covered by the base delivery fee
pub const DEFAULT_MIN_DISTANCE_KM: f64 = 5.0;

/// Default share (%) of the delivery fee still charged above the free-delivery threshold
pub const DEFAULT_DELIVERY_FEE_FREE_PERCENTAGE: f64 = 50.0;

/// Tariff settings document (配送/折扣/税费设置)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSettings {
    #[serde(default)]
    pub delivery: DeliverySettings,
    #[serde(default)]
    pub discount: DiscountSettings,
    #[serde(default)]
    pub tax: TaxSettings,
    #[serde(default)]
    pub fees: FeeSettings,
}

/// Distance-based delivery charges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,
    /// Percentage of the full fee charged once the order exceeds the threshold (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee_free_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f64>,
    /// Carried for completeness, never charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_charge: Option<f64>,
}

/// Flat order discount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
}

/// Tax rates, both percentages of the subtotal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_tax: Option<f64>,
}

/// Fixed fees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_order_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_fee: Option<f64>,
}

/// Tariff settings as returned by the settings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSnapshot {
    pub settings: TariffSettings,
    /// Incremented on every successful replace; 0 means loaded from disk
    pub version: u64,
    /// Unix millis of the last replace (or load)
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "delivery": {"baseFee": 30, "extraPerKm": 5, "freeDeliveryThreshold": 500},
            "discount": {"flatDiscount": 20, "minOrderValue": 300},
            "tax": {"gstPercent": 5, "serviceTax": 1},
            "fees": {"smallOrderFee": 15, "packagingFee": 10}
        }"#;
        let settings: TariffSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.delivery.base_fee, Some(30.0));
        assert_eq!(settings.delivery.min_distance, None);
        assert_eq!(settings.delivery.delivery_fee_free_percentage, None);
        assert_eq!(settings.tax.service_tax, Some(1.0));
        assert_eq!(settings.fees.packaging_fee, Some(10.0));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let settings: TariffSettings = serde_json::from_str(r#"{"tax": {"gstPercent": 5}}"#).unwrap();
        assert_eq!(settings.delivery, DeliverySettings::default());
        assert_eq!(settings.tax.gst_percent, Some(5.0));
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let settings = TariffSettings {
            delivery: DeliverySettings {
                base_fee: Some(30.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"baseFee\":30.0"));
        assert!(!json.contains("peakCharge"));
    }
}
