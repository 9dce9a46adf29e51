//! Data models
//!
//! Shared between checkout-server and its callers (via API).

pub mod pricing;
pub mod tariff;

// Re-exports
pub use pricing::*;
pub use tariff::*;
