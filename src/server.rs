use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config, success};

/// Routes of the HTTP API with `state` attached.
pub fn router(state: AppStateRef) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/music", get(api::music))
        .layer(Extension(state))
}

pub type AppStateRef = Arc<api::AppState>;

/// Binds `SERVER_ADDRESS` and serves the API until the process stops.
pub async fn start_api_server(state: AppStateRef) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
