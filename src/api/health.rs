use std::sync::Arc;

use axum::{Extension, response::Json};

use super::AppState;
use crate::{config, types::HealthResponse};

/// Liveness plus whether `/api/music` can reach the upstream at all.
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        upstream_configured: state.source.is_some(),
        max_concurrent_fetches: config::max_concurrent_fetches(),
    })
}
