//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "tariffConfigured": true,
//!   "uptimeSeconds": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 是否已配置资费
    tariff_configured: bool,
    /// 运行时间 (秒)
    uptime_seconds: u64,
}

/// GET /health
///
/// 未配置资费时报价接口不可用，状态为 degraded
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let tariff_configured = state.tariffs.is_configured();
    Json(HealthResponse {
        status: if tariff_configured { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        tariff_configured,
        uptime_seconds: state.uptime_seconds(),
    })
}
