use super::YouTubeClient;
use crate::{error::ApiError, types::PlaylistItemsResponse};

impl YouTubeClient {
    /// Calls `GET /playlistItems?part=snippet,contentDetails` for the first
    /// page of a playlist.
    pub(super) async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemsResponse, ApiError> {
        let params = [
            ("part", "snippet,contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", max_results.clamp(1, 50).to_string()),
        ];

        self.get_json("playlistItems", &params).await
    }
}
