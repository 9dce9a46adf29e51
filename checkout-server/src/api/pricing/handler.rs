//! Pricing API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{PricingRequest, PricingResult, QuoteRequest};

use crate::api::json_rejection;
use crate::core::ServerState;
use crate::pricing;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// POST /api/pricing/quote - 使用当前资费计算
///
/// `itemTotal` 与 `items` 必须且只能提供一个
pub async fn quote(
    State(state): State<ServerState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> AppResult<ApiResponse<PricingResult>> {
    let Json(req) = payload.map_err(json_rejection)?;
    let tariff = state
        .tariffs
        .current()
        .ok_or_else(AppError::tariff_not_configured)?;

    let result = match (req.item_total, req.items.as_deref()) {
        (Some(item_total), None) => {
            pricing::compute_with_tariff(item_total, req.distance_km, &tariff.config)?
        }
        (None, Some([])) => return Err(AppError::new(ErrorCode::CartEmpty)),
        (None, Some(lines)) => pricing::compute_for_cart(lines, req.distance_km, &tariff.config)?,
        (Some(_), Some(_)) => {
            return Err(AppError::invalid_request(
                "Provide either itemTotal or items, not both",
            ));
        }
        (None, None) => {
            return Err(AppError::invalid_request("itemTotal or items is required"));
        }
    };

    tracing::debug!(
        tariff_version = tariff.version,
        to_pay = %result.to_pay,
        "Quote computed"
    );
    Ok(ApiResponse::success(result))
}

/// POST /api/pricing/compute - 使用请求内的资费计算
pub async fn compute(
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> AppResult<ApiResponse<PricingResult>> {
    let Json(req) = payload.map_err(json_rejection)?;
    let result = pricing::compute_total(&req)?;
    Ok(ApiResponse::success(result))
}
