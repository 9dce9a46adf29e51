//! Shared types for the checkout pricing service
//!
//! Error codes, API response envelope and the wire models exchanged with the
//! pricing engine.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
