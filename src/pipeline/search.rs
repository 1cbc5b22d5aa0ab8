use std::collections::HashSet;

use super::{FALLBACK_SEARCH_LIMIT, PLAYLIST_SEARCH_LIMIT};
use crate::{
    error::{PipelineError, Result},
    types::{MediaEntry, PlaylistCandidate, SearchItem, SearchKind, SearchResponse},
    utils, warning,
    youtube::VideoSource,
};

/// Finds up to ten playlists for the composed search string, in the order
/// the upstream ranks them.
///
/// # Errors
///
/// Any upstream failure is returned as [`PipelineError::UpstreamSearch`]
/// and ends the run.
pub async fn search_playlists(
    source: &dyn VideoSource,
    query: &str,
) -> Result<Vec<PlaylistCandidate>> {
    let response = source
        .search(query, SearchKind::Playlist, PLAYLIST_SEARCH_LIMIT)
        .await
        .map_err(PipelineError::UpstreamSearch)?;

    Ok(playlist_candidates(response))
}

/// Playlist ids of a search response, without blanks or repeats.
pub fn playlist_candidates(response: SearchResponse) -> Vec<PlaylistCandidate> {
    let mut seen = HashSet::new();
    response
        .items
        .into_iter()
        .filter_map(|item| item.id.playlist_id)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty() && seen.insert(id.clone()))
        .take(PLAYLIST_SEARCH_LIMIT as usize)
        .map(|playlist_id| PlaylistCandidate { playlist_id })
        .collect()
}

/// Direct video search used when no playlist produced entries.
///
/// Failures are logged and yield no entries.
pub async fn fallback_search(source: &dyn VideoSource, raw_query: &str) -> Vec<MediaEntry> {
    match source
        .search(raw_query, SearchKind::Video, FALLBACK_SEARCH_LIMIT)
        .await
    {
        Ok(response) => response
            .items
            .into_iter()
            .filter_map(entry_from_search_item)
            .take(FALLBACK_SEARCH_LIMIT as usize)
            .collect(),
        Err(e) => {
            warning!("Fallback search for \"{}\" failed: {}", raw_query, e);
            Vec::new()
        }
    }
}

fn entry_from_search_item(item: SearchItem) -> Option<MediaEntry> {
    let item_id = item.id.video_id?.trim().to_string();
    if item_id.is_empty() {
        return None;
    }
    let snippet = item.snippet.unwrap_or_default();

    Some(MediaEntry {
        item_id,
        title_text: snippet.title,
        owner_text: snippet.channel_title,
        thumbnail_url: utils::best_thumbnail(snippet.thumbnails.as_ref()),
    })
}
