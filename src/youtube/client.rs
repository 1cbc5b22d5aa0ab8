use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config,
    error::{ApiError, PipelineError},
    types::{PlaylistItemsResponse, SearchKind, SearchResponse, VideoListResponse},
};

/// Upstream operations used by the pipeline.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Free text search returning playlists or videos, at most `max_results`.
    async fn search(
        &self,
        query: &str,
        kind: SearchKind,
        max_results: u32,
    ) -> Result<SearchResponse, ApiError>;

    /// First `max_results` members of a playlist.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemsResponse, ApiError>;

    /// Duration metadata for the given video ids.
    async fn videos(&self, ids: &[String]) -> Result<VideoListResponse, ApiError>;
}

/// reqwest based [`VideoSource`] talking to the YouTube Data API.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    pub(super) http: Client,
    pub(super) base_url: String,
    pub(super) api_key: String,
}

impl YouTubeClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(format!("chapterbeats/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Builds a client from `YOUTUBE_API_KEY`, `YOUTUBE_API_URL` and
    /// `UPSTREAM_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Configuration`] when no API key is configured.
    pub fn from_env() -> Result<Self, PipelineError> {
        let api_key = config::youtube_api_key().ok_or_else(|| {
            PipelineError::Configuration("YouTube API key not configured".to_string())
        })?;

        Self::new(config::youtube_api_url(), api_key, config::upstream_timeout())
            .map_err(|e| PipelineError::Configuration(format!("Cannot build HTTP client: {}", e)))
    }

    pub fn shared(self) -> Arc<dyn VideoSource> {
        Arc::new(self)
    }

    /// GETs `{base_url}/{endpoint}` with the API key attached and decodes
    /// the JSON body.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: upstream_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string()),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{}: {}", endpoint, e)))
    }
}

/// `error.message` of a Google API error body.
fn upstream_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search(
        &self,
        query: &str,
        kind: SearchKind,
        max_results: u32,
    ) -> Result<SearchResponse, ApiError> {
        self.search_items(query, kind, max_results).await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemsResponse, ApiError> {
        self.list_playlist_items(playlist_id, max_results).await
    }

    async fn videos(&self, ids: &[String]) -> Result<VideoListResponse, ApiError> {
        self.video_details(ids).await
    }
}
