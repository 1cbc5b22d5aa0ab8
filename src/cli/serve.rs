use std::sync::Arc;

use crate::{api::AppState, config, error, info, server, warning, youtube::YouTubeClient};

pub async fn serve() {
    let source = match YouTubeClient::from_env() {
        Ok(client) => Some(client.shared()),
        Err(e) => {
            warning!(
                "{}. /api/music answers with 500 until YOUTUBE_API_KEY is set in {}",
                e,
                config::env_path().display()
            );
            None
        }
    };

    info!("Upstream API: {}", config::youtube_api_url());

    if let Err(e) = server::start_api_server(Arc::new(AppState::new(source))).await {
        error!("Server stopped: {}", e);
    }
}
