//! Tests for the YouTube Data API client against a mock server.

use std::time::Duration;

use chapterbeats::error::ApiError;
use chapterbeats::types::SearchKind;
use chapterbeats::youtube::{VideoSource, YouTubeClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> YouTubeClient {
    YouTubeClient::new(server.uri(), API_KEY, Duration::from_secs(5))
        .expect("client should build")
}

// =============================================================================
// Search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn test_playlist_search_sends_expected_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("part", "snippet"))
            .and(query_param("q", "romantic piano instrumental playlist"))
            .and(query_param("type", "playlist"))
            .and(query_param("maxResults", "10"))
            .and(query_param("key", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": { "kind": "youtube#playlist", "playlistId": "PL1" } },
                    { "id": { "kind": "youtube#playlist", "playlistId": "PL2" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .search(
                "romantic piano instrumental playlist",
                SearchKind::Playlist,
                10,
            )
            .await
            .unwrap();

        let ids: Vec<_> = response
            .items
            .iter()
            .filter_map(|item| item.id.playlist_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["PL1", "PL2"]);
    }

    #[tokio::test]
    async fn test_video_search_is_restricted_to_music() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("type", "video"))
            .and(query_param("videoCategoryId", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": { "videoId": "abc" },
                    "snippet": {
                        "title": "Rainy Jazz",
                        "channelTitle": "Noir FM",
                        "thumbnails": { "high": { "url": "https://img/abc.jpg" } }
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .search("rainy jazz", SearchKind::Video, 15)
            .await
            .unwrap();

        let item = &response.items[0];
        assert_eq!(item.id.video_id.as_deref(), Some("abc"));
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.channel_title, "Noir FM");
        assert_eq!(
            snippet
                .thumbnails
                .as_ref()
                .and_then(|t| t.high.as_ref())
                .map(|t| t.url.as_str()),
            Some("https://img/abc.jpg")
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_upstream_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": { "code": 403, "message": "quota exceeded" }
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .search("anything", SearchKind::Playlist, 10)
            .await;

        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_without_body_uses_reason() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .search("anything", SearchKind::Playlist, 10)
            .await;

        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .search("anything", SearchKind::Playlist, 10)
            .await;

        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}

// =============================================================================
// Playlist items
// =============================================================================

mod playlist_items {
    use super::*;

    #[tokio::test]
    async fn test_lists_playlist_members() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("part", "snippet,contentDetails"))
            .and(query_param("playlistId", "PL1"))
            .and(query_param("maxResults", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "snippet": {
                        "title": "Track One",
                        "channelTitle": "Curator",
                        "videoOwnerChannelTitle": "Original Artist",
                        "resourceId": { "kind": "youtube#video", "videoId": "v1" }
                    },
                    "contentDetails": { "videoId": "v1" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).playlist_items("PL1", 10).await.unwrap();

        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(
            item.content_details
                .as_ref()
                .and_then(|c| c.video_id.as_deref()),
            Some("v1")
        );
        assert_eq!(
            item.snippet
                .as_ref()
                .and_then(|s| s.video_owner_channel_title.as_deref()),
            Some("Original Artist")
        );
    }

    #[tokio::test]
    async fn test_missing_playlist_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": 404, "message": "playlist not found" }
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).playlist_items("gone", 10).await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }
}

// =============================================================================
// Videos
// =============================================================================

mod videos {
    use super::*;

    #[tokio::test]
    async fn test_fetches_durations_for_joined_ids() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("id", "a,b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": "a", "contentDetails": { "duration": "PT1H2M3S" } },
                    { "id": "b", "contentDetails": { "duration": "PT45S" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ids = vec!["a".to_string(), "b".to_string()];
        let response = client_for(&server).videos(&ids).await.unwrap();

        let durations: Vec<_> = response
            .items
            .iter()
            .map(|v| {
                (
                    v.id.as_str(),
                    v.content_details
                        .as_ref()
                        .and_then(|c| c.duration.as_deref()),
                )
            })
            .collect();
        assert_eq!(
            durations,
            vec![("a", Some("PT1H2M3S")), ("b", Some("PT45S"))]
        );
    }

    #[tokio::test]
    async fn test_empty_id_list_skips_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let response = client_for(&server).videos(&[]).await.unwrap();
        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn test_more_than_fifty_ids_rejected_locally() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let ids: Vec<String> = (0..51).map(|i| format!("v{}", i)).collect();
        let result = client_for(&server).videos(&ids).await;

        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }
}

// =============================================================================
// Transport
// =============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "items": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), API_KEY, Duration::from_millis(200)).unwrap();
        let result = client.search("slow", SearchKind::Playlist, 10).await;

        assert!(matches!(result, Err(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            YouTubeClient::new(format!("{}/", server.uri()), API_KEY, Duration::from_secs(5))
                .unwrap();
        let response = client.videos(&["x".to_string()]).await.unwrap();
        assert!(response.items.is_empty());
    }
}
