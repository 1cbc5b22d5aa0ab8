use super::YouTubeClient;
use crate::{
    error::ApiError,
    types::{SearchKind, SearchResponse},
};

/// YouTube "Music" category, applied to video searches.
const MUSIC_CATEGORY_ID: &str = "10";

impl YouTubeClient {
    /// Calls `GET /search?part=snippet`.
    ///
    /// Video searches are restricted to the music category. `max_results`
    /// is clamped to the API maximum of 50.
    pub(super) async fn search_items(
        &self,
        query: &str,
        kind: SearchKind,
        max_results: u32,
    ) -> Result<SearchResponse, ApiError> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", kind.to_string()),
            ("maxResults", max_results.clamp(1, 50).to_string()),
        ];
        if kind == SearchKind::Video {
            params.push(("videoCategoryId", MUSIC_CATEGORY_ID.to_string()));
        }

        self.get_json("search", &params).await
    }
}
