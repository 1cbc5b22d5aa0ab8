use super::{MAX_VIDEO_IDS_PER_CALL, YouTubeClient};
use crate::{error::ApiError, types::VideoListResponse};

impl YouTubeClient {
    /// Calls `GET /videos?part=contentDetails` for a batch of ids.
    ///
    /// Callers chunk their ids; a batch above the API limit is rejected
    /// here rather than letting the upstream answer with a 400.
    pub(super) async fn video_details(&self, ids: &[String]) -> Result<VideoListResponse, ApiError> {
        if ids.is_empty() {
            return Ok(VideoListResponse::default());
        }
        if ids.len() > MAX_VIDEO_IDS_PER_CALL {
            return Err(ApiError::InvalidRequest(format!(
                "{} video ids requested, at most {} allowed per call",
                ids.len(),
                MAX_VIDEO_IDS_PER_CALL
            )));
        }

        let params = [
            ("part", "contentDetails".to_string()),
            ("id", ids.join(",")),
            ("maxResults", ids.len().to_string()),
        ];

        self.get_json("videos", &params).await
    }
}
