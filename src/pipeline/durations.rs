use std::sync::Arc;

use tokio::sync::Semaphore;

use super::{DURATION_CHUNK_SIZE, MAX_DURATION_IDS};
use crate::{
    types::{DurationSeconds, MediaEntry, VideoListResponse},
    utils, warning,
    youtube::VideoSource,
};

/// Looks up durations for the first fifty distinct entries.
pub async fn resolve_durations(
    source: Arc<dyn VideoSource>,
    entries: &[MediaEntry],
    concurrency: usize,
) -> DurationSeconds {
    resolve_durations_with(
        source,
        entries,
        MAX_DURATION_IDS,
        DURATION_CHUNK_SIZE,
        concurrency,
    )
    .await
}

/// Looks up durations for at most `max_ids` distinct ids, `chunk_size` ids
/// per upstream call.
///
/// Chunks are fetched as separate tasks, at most `concurrency` at once. A
/// failed chunk is logged and its ids stay unresolved; the caller estimates
/// those durations instead. Unparsable duration strings resolve to 0.
pub async fn resolve_durations_with(
    source: Arc<dyn VideoSource>,
    entries: &[MediaEntry],
    max_ids: usize,
    chunk_size: usize,
    concurrency: usize,
) -> DurationSeconds {
    let ids = utils::unique_item_ids(entries, max_ids);
    if ids.is_empty() {
        return DurationSeconds::new();
    }

    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut handles = Vec::new();

    for (index, chunk) in utils::chunk_ids(&ids, chunk_size).into_iter().enumerate() {
        let source = Arc::clone(&source);
        let permits = Arc::clone(&permits);

        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await.ok();
            source.videos(&chunk).await
        });
        handles.push((index, handle));
    }

    // barrier: every chunk finishes before anything is merged
    let mut responses: Vec<VideoListResponse> = Vec::with_capacity(handles.len());
    for (index, handle) in handles {
        match handle.await {
            Ok(Ok(response)) => responses.push(response),
            Ok(Err(e)) => {
                warning!("Duration lookup for chunk {} failed: {}", index + 1, e);
            }
            Err(e) => {
                warning!("Duration chunk {} did not finish: {}", index + 1, e);
            }
        }
    }

    merge_durations(responses)
}

/// Folds `videos` responses into one id to seconds map.
pub fn merge_durations(responses: Vec<VideoListResponse>) -> DurationSeconds {
    responses
        .into_iter()
        .flat_map(|response| response.items)
        .filter(|video| !video.id.is_empty())
        .filter_map(|video| {
            let duration = video.content_details?.duration?;
            Some((video.id, utils::parse_iso_duration(&duration)))
        })
        .fold(DurationSeconds::new(), |mut acc, (id, seconds)| {
            acc.entry(id).or_insert(seconds);
            acc
        })
}
