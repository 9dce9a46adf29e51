//! Pricing errors

use shared::error::AppError;
use thiserror::Error;

/// Errors raised by the pricing engine
///
/// Both kinds are deterministic: retrying the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Negative, non-finite or out-of-range numeric input
    #[error("{message}")]
    InvalidArgument { field: String, message: String },

    /// Required tariff field is absent and has no default
    #[error("tariff field '{field}' is required")]
    IncompleteConfiguration { field: String },
}

impl PricingError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::IncompleteConfiguration {
            field: field.to_string(),
        }
    }

    /// Wire name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidArgument { field, .. } | Self::IncompleteConfiguration { field } => field,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidArgument { field, message } => {
                AppError::invalid_argument(field, message)
            }
            PricingError::IncompleteConfiguration { field } => {
                AppError::incomplete_configuration(field)
            }
        }
    }
}
