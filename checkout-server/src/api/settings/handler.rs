//! Tariff Settings API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{TariffSettings, TariffSnapshot};

use crate::api::json_rejection;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/settings/tariff - 获取当前资费设置
pub async fn get_tariff(State(state): State<ServerState>) -> AppResult<ApiResponse<TariffSnapshot>> {
    let snapshot = state
        .tariffs
        .current()
        .map(|t| t.snapshot())
        .ok_or_else(AppError::tariff_not_configured)?;
    Ok(ApiResponse::success(snapshot))
}

/// PUT /api/settings/tariff - 替换资费设置
///
/// 校验失败时保留原设置
pub async fn replace_tariff(
    State(state): State<ServerState>,
    payload: Result<Json<TariffSettings>, JsonRejection>,
) -> AppResult<ApiResponse<TariffSnapshot>> {
    let Json(settings) = payload.map_err(json_rejection)?;

    let store = state.tariffs.clone();
    let snapshot = tokio::task::spawn_blocking(move || store.replace(settings))
        .await
        .map_err(|e| AppError::internal(format!("Tariff update task failed: {}", e)))??;

    Ok(ApiResponse::success_with_message("Tariff updated", snapshot))
}
