//! Pricing API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/pricing/quote | POST | 按当前资费计算应付金额 |
//! | /api/pricing/compute | POST | 按请求内附带的资费计算 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/quote", post(handler::quote))
        .route("/compute", post(handler::compute))
}
