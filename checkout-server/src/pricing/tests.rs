use super::*;
use rust_decimal::Decimal;
use shared::models::{
    DeliverySettings, DiscountSettings, FeeSettings, PricingRequest, TariffSettings, TaxSettings,
};
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_settings() -> TariffSettings {
    TariffSettings {
        delivery: DeliverySettings {
            base_fee: Some(30.0),
            extra_per_km: Some(5.0),
            free_delivery_threshold: Some(500.0),
            delivery_fee_free_percentage: Some(50.0),
            min_distance: Some(5.0),
            peak_charge: None,
        },
        discount: DiscountSettings {
            flat_discount: Some(20.0),
            min_order_value: Some(300.0),
        },
        tax: TaxSettings {
            gst_percent: Some(5.0),
            service_tax: Some(1.0),
        },
        fees: FeeSettings {
            small_order_fee: Some(15.0),
            packaging_fee: Some(10.0),
        },
    }
}

fn sample_tariff() -> TariffConfig {
    TariffConfig::resolve(&sample_settings()).unwrap()
}

fn request(item_total: f64, distance_km: f64) -> PricingRequest {
    PricingRequest {
        item_total,
        distance_km,
        tariff: sample_settings(),
    }
}

// ========== Worked examples ==========

#[test]
fn test_order_within_min_distance_below_threshold() {
    let result = compute_total(&request(400.0, 5.0)).unwrap();

    assert_eq!(result.delivery_fee.to_string(), "30.00");
    assert_eq!(result.delivery_discount, None);
    assert_eq!(result.discount.to_string(), "20.00");
    assert_eq!(result.small_order_fee.to_string(), "0.00");
    assert_eq!(result.packaging_fee.to_string(), "10.00");
    assert_eq!(result.gst.to_string(), "21.00");
    assert_eq!(result.service_tax.to_string(), "4.20");
    assert_eq!(result.to_pay.to_string(), "445.20");
    assert_eq!(result.item_total.to_string(), "400.00");
    // 30 + 0 + 10 + 21 + 4.20
    assert_eq!(result.taxes_and_charges.to_string(), "65.20");
}

#[test]
fn test_order_above_threshold_with_extra_distance() {
    let result = compute_total(&request(600.0, 10.0)).unwrap();

    // full fee 30 + 5 * 5 = 55, half of it charged
    assert_eq!(result.delivery_fee.to_string(), "27.50");
    assert_eq!(result.delivery_discount, Some(dec("27.50")));
    assert_eq!(result.discount.to_string(), "20.00");
    assert_eq!(result.small_order_fee.to_string(), "0.00");
    // subtotal 617.50: gst 30.875, service tax 6.175
    assert_eq!(result.gst.to_string(), "30.88");
    assert_eq!(result.service_tax.to_string(), "6.18");
    // 617.50 + 30.875 + 6.175 = 654.55 exactly
    assert_eq!(result.to_pay.to_string(), "654.55");
}

#[test]
fn test_breakdown_keeps_unrounded_values() {
    let tariff = sample_tariff();
    let b = calculate_breakdown(Decimal::from(600), Decimal::from(10), &tariff);

    assert_eq!(b.full_delivery_fee, Decimal::from(55));
    assert_eq!(b.sub_total, dec("617.5"));
    assert_eq!(b.gst, dec("30.875"));
    assert_eq!(b.service_tax, dec("6.175"));
    assert_eq!(b.to_pay, dec("654.55"));
}

// ========== Delivery fee ==========

#[test]
fn test_full_delivery_fee_flat_up_to_min_distance() {
    let delivery = sample_tariff().delivery;
    assert_eq!(full_delivery_fee(Decimal::ZERO, &delivery), Decimal::from(30));
    assert_eq!(full_delivery_fee(Decimal::from(5), &delivery), Decimal::from(30));
    assert_eq!(full_delivery_fee(dec("5.5"), &delivery), dec("32.5"));
    assert_eq!(full_delivery_fee(Decimal::from(12), &delivery), Decimal::from(65));
}

#[test]
fn test_default_min_distance_and_percentage() {
    let mut settings = sample_settings();
    settings.delivery.min_distance = None;
    settings.delivery.delivery_fee_free_percentage = None;
    let tariff = TariffConfig::resolve(&settings).unwrap();

    // 7 km with default 5 km covered: 30 + 2 * 5 = 40, halved above threshold
    let result = compute_with_tariff(800.0, 7.0, &tariff).unwrap();
    assert_eq!(result.delivery_fee.to_string(), "20.00");
    assert_eq!(result.delivery_discount, Some(dec("20.00")));
}

#[test]
fn test_full_free_delivery() {
    let mut settings = sample_settings();
    settings.delivery.delivery_fee_free_percentage = Some(0.0);
    let tariff = TariffConfig::resolve(&settings).unwrap();

    let result = compute_with_tariff(900.0, 3.0, &tariff).unwrap();
    assert_eq!(result.delivery_fee.to_string(), "0.00");
    assert_eq!(result.delivery_discount, Some(dec("30.00")));
}

#[test]
fn test_hundred_percent_omits_delivery_discount() {
    let mut settings = sample_settings();
    settings.delivery.delivery_fee_free_percentage = Some(100.0);
    let tariff = TariffConfig::resolve(&settings).unwrap();

    let result = compute_with_tariff(900.0, 3.0, &tariff).unwrap();
    assert_eq!(result.delivery_fee.to_string(), "30.00");
    assert_eq!(result.delivery_discount, None);
}

// ========== Threshold boundaries ==========

#[test]
fn test_exactly_at_free_delivery_threshold_pays_full_fee() {
    let at = compute_total(&request(500.0, 5.0)).unwrap();
    assert_eq!(at.delivery_fee.to_string(), "30.00");
    assert_eq!(at.delivery_discount, None);

    let above = compute_total(&request(501.0, 5.0)).unwrap();
    assert_eq!(above.delivery_fee.to_string(), "15.00");
    assert_eq!(above.delivery_discount, Some(dec("15.00")));
}

#[test]
fn test_exactly_at_min_order_value_gets_discount() {
    let at = compute_total(&request(300.0, 5.0)).unwrap();
    assert_eq!(at.discount.to_string(), "20.00");
    assert_eq!(at.small_order_fee.to_string(), "0.00");

    let below = compute_total(&request(299.0, 5.0)).unwrap();
    assert_eq!(below.discount.to_string(), "0.00");
    assert_eq!(below.small_order_fee.to_string(), "15.00");
}

#[test]
fn test_small_order_totals() {
    // 100 + 30 delivery + 15 small order + 10 packaging = 155
    let result = compute_total(&request(100.0, 2.0)).unwrap();
    assert_eq!(result.gst.to_string(), "7.75");
    assert_eq!(result.service_tax.to_string(), "1.55");
    assert_eq!(result.to_pay.to_string(), "164.30");
    assert_eq!(result.taxes_and_charges.to_string(), "64.30");
}

#[test]
fn test_zero_item_total() {
    let result = compute_total(&request(0.0, 0.0)).unwrap();
    assert_eq!(result.item_total.to_string(), "0.00");
    assert_eq!(result.small_order_fee.to_string(), "15.00");
    // 0 + 30 + 15 + 10 = 55, taxes 2.75 + 0.55
    assert_eq!(result.to_pay.to_string(), "58.30");
}

// ========== Invariants ==========

#[test]
fn test_to_pay_matches_components_within_tolerance() {
    for (item_total, distance) in [(400.0, 5.0), (600.0, 10.0), (123.45, 7.3), (999.99, 0.4)] {
        let r = compute_total(&request(item_total, distance)).unwrap();
        let recomposed = r.item_total - r.discount
            + r.delivery_fee
            + r.small_order_fee
            + r.packaging_fee
            + r.gst
            + r.service_tax;
        assert!(
            (recomposed - r.to_pay).abs() <= money::MONEY_TOLERANCE,
            "{} vs {}",
            recomposed,
            r.to_pay
        );
    }
}

#[test]
fn test_identical_inputs_identical_output() {
    let first = compute_total(&request(345.67, 8.9)).unwrap();
    let second = compute_total(&request(345.67, 8.9)).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ========== Errors ==========

#[test]
fn test_negative_inputs_rejected() {
    let err = compute_total(&request(-1.0, 5.0)).unwrap_err();
    assert_eq!(err.field(), "itemTotal");

    let err = compute_total(&request(100.0, -0.5)).unwrap_err();
    assert_eq!(err.field(), "distanceKm");
}

#[test]
fn test_non_finite_inputs_rejected() {
    assert!(compute_total(&request(f64::NAN, 5.0)).is_err());
    assert!(compute_total(&request(100.0, f64::INFINITY)).is_err());
}

#[test]
fn test_incomplete_tariff_rejected() {
    let mut req = request(400.0, 5.0);
    req.tariff.fees.packaging_fee = None;

    let err = compute_total(&req).unwrap_err();
    assert_eq!(err, PricingError::missing("fees.packagingFee"));
}

// ========== Cart ==========

#[test]
fn test_cart_matches_item_total_path() {
    let tariff = sample_tariff();
    let lines = vec![
        shared::models::CartLine {
            price: 150.0,
            quantity: 2,
        },
        shared::models::CartLine {
            price: 100.0,
            quantity: 1,
        },
    ];

    let by_cart = compute_for_cart(&lines, 5.0, &tariff).unwrap();
    let by_total = compute_with_tariff(400.0, 5.0, &tariff).unwrap();
    assert_eq!(by_cart, by_total);
}

#[test]
fn test_peak_charge_not_charged() {
    let mut with_peak = request(600.0, 10.0);
    with_peak.tariff.delivery.peak_charge = Some(25.0);

    let plain = compute_total(&request(600.0, 10.0)).unwrap();
    let peaked = compute_total(&with_peak).unwrap();
    assert_eq!(peaked, plain);
    assert_eq!(peaked.delivery_fee.to_string(), "27.50");
}

#[test]
fn test_sub_precision_amounts_price_as_zero() {
    // Below Decimal's 28-digit scale a finite input converts to zero
    let tiny = compute_with_tariff(1e-30, 1e-30, &sample_tariff()).unwrap();
    let zero = compute_with_tariff(0.0, 0.0, &sample_tariff()).unwrap();
    assert_eq!(tiny, zero);
    assert_eq!(money::to_decimal(1e-30), Decimal::ZERO);
}

// ========== Logging ==========

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn debug_logs_of(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_both_entry_points_log_breakdown() {
    let tariff = sample_tariff();

    let by_total = debug_logs_of(|| {
        compute_with_tariff(400.0, 5.0, &tariff).unwrap();
    });
    assert!(by_total.contains("Computed checkout total"), "{}", by_total);

    let lines = [shared::models::CartLine {
        price: 200.0,
        quantity: 2,
    }];
    let by_cart = debug_logs_of(|| {
        compute_for_cart(&lines, 5.0, &tariff).unwrap();
    });
    assert!(by_cart.contains("Computed checkout total"), "{}", by_cart);
    assert!(by_cart.contains("to_pay=445.2"), "{}", by_cart);
}
