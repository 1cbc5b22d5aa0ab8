use std::sync::Arc;

use tokio::sync::Semaphore;

use super::ENTRIES_PER_PLAYLIST;
use crate::{
    types::{MediaEntry, PlaylistCandidate, PlaylistItem, PlaylistItemsResponse},
    utils, warning,
    youtube::VideoSource,
};

/// Fetches the members of every candidate playlist.
///
/// One task per playlist, at most `concurrency` in flight. All tasks are
/// awaited in candidate order, so the result lists playlists in discovery
/// order and entries in playlist order whatever order the fetches finish
/// in. A playlist whose fetch fails contributes no entries.
pub async fn expand_playlists(
    source: Arc<dyn VideoSource>,
    candidates: &[PlaylistCandidate],
    concurrency: usize,
) -> Vec<MediaEntry> {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut handles = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let source = Arc::clone(&source);
        let permits = Arc::clone(&permits);
        let playlist_id = candidate.playlist_id.clone();

        let handle = tokio::spawn(async move {
            // the semaphore is never closed
            let _permit = permits.acquire_owned().await.ok();
            source
                .playlist_items(&playlist_id, ENTRIES_PER_PLAYLIST)
                .await
        });
        handles.push((candidate.playlist_id.clone(), handle));
    }

    let mut entries = Vec::new();
    for (playlist_id, handle) in handles {
        match handle.await {
            Ok(Ok(response)) => entries.extend(playlist_entries(response)),
            Ok(Err(e)) => {
                warning!("Skipping playlist {}: {}", playlist_id, e);
            }
            Err(e) => {
                warning!("Playlist task {} did not finish: {}", playlist_id, e);
            }
        }
    }

    entries
}

/// Entries of one playlist page, capped at ten. Items without a video id
/// (removed or private videos) are dropped.
pub fn playlist_entries(response: PlaylistItemsResponse) -> Vec<MediaEntry> {
    response
        .items
        .into_iter()
        .filter_map(entry_from_playlist_item)
        .take(ENTRIES_PER_PLAYLIST as usize)
        .collect()
}

fn entry_from_playlist_item(item: PlaylistItem) -> Option<MediaEntry> {
    let snippet = item.snippet.unwrap_or_default();

    let item_id = item
        .content_details
        .and_then(|details| details.video_id)
        .or_else(|| {
            snippet
                .resource_id
                .as_ref()
                .and_then(|resource| resource.video_id.clone())
        })
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())?;

    // channelTitle of a playlist item is the playlist owner, not the uploader
    let owner_text = snippet
        .video_owner_channel_title
        .clone()
        .filter(|owner| !owner.is_empty())
        .unwrap_or_else(|| snippet.channel_title.clone());

    Some(MediaEntry {
        item_id,
        thumbnail_url: utils::best_thumbnail(snippet.thumbnails.as_ref()),
        title_text: snippet.title,
        owner_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlaylistItemContentDetails, ResourceId, Snippet};

    fn item(content_id: Option<&str>, resource_id: Option<&str>, title: &str) -> PlaylistItem {
        PlaylistItem {
            snippet: Some(Snippet {
                title: title.to_string(),
                channel_title: "Playlist Owner".to_string(),
                resource_id: resource_id.map(|id| ResourceId {
                    video_id: Some(id.to_string()),
                }),
                ..Default::default()
            }),
            content_details: content_id.map(|id| PlaylistItemContentDetails {
                video_id: Some(id.to_string()),
            }),
        }
    }

    #[test]
    fn entries_are_capped_at_ten_per_playlist() {
        let items = (1..=14)
            .map(|i| item(Some(&format!("v{}", i)), None, &format!("Song {}", i)))
            .collect();

        let entries = playlist_entries(PlaylistItemsResponse { items });

        assert_eq!(entries.len(), ENTRIES_PER_PLAYLIST as usize);
        assert_eq!(entries[0].item_id, "v1");
        assert_eq!(entries[9].item_id, "v10");
    }

    #[test]
    fn items_without_video_id_are_dropped() {
        let items = vec![
            item(None, None, "Deleted video"),
            item(Some("a"), None, "From content details"),
            item(None, Some("b"), "From resource id"),
            item(Some(""), Some(" "), "Blank ids"),
            PlaylistItem::default(),
            item(Some("c"), Some("ignored"), "Content details win"),
        ];

        let entries = playlist_entries(PlaylistItemsResponse { items });

        let ids: Vec<&str> = entries.iter().map(|e| e.item_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(entries[1].owner_text, "Playlist Owner");
    }

    #[test]
    fn dropped_items_do_not_count_towards_the_cap() {
        let mut items: Vec<PlaylistItem> = (1..=12)
            .map(|i| item(Some(&format!("v{}", i)), None, "Song"))
            .collect();
        items.insert(0, item(None, None, "Private video"));
        items.insert(5, item(None, None, "Private video"));

        let entries = playlist_entries(PlaylistItemsResponse { items });

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[9].item_id, "v10");
    }
}
