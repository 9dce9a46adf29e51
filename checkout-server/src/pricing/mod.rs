//! Checkout Pricing Module
//!
//! Computes the payable breakdown of an order: delivery fee (with distance
//! surcharge and free-delivery reduction), flat discount, small-order and
//! packaging fees, GST and service tax.
//!
//! The calculation is a pure function of its inputs. Settings are resolved
//! into a [`TariffConfig`] once, and the same config can be shared by any
//! number of concurrent callers.

mod calculator;
mod cart;
mod error;
pub mod money;
mod tariff;

pub use calculator::*;
pub use cart::*;
pub use error::PricingError;
pub use tariff::*;

#[cfg(test)]
mod tests;
