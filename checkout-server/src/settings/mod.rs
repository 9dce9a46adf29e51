//! Tariff settings
//!
//! File-backed store for the delivery/discount/tax/fee settings the pricing
//! engine reads.

mod store;

pub use store::{StoredTariff, TariffStore};
