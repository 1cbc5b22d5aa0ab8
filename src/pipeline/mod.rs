//! # Resolution Pipeline
//!
//! Turns a [`CategoryQuery`] into an ordered list of [`Track`]s:
//!
//! ```text
//! genre ─► search phrase ─► playlist search ─► playlist expansion
//!                                                    │ (empty)
//!                                                    ▼
//!                                            direct video search
//!                                                    │
//!                              duration lookup ◄─────┘
//!                                    │
//!                                    ▼
//!                          assembly + filtering ─► tracks
//! ```
//!
//! Only the playlist search may abort a run. A playlist that cannot be
//! expanded, a failed duration batch or a failed fallback search contribute
//! nothing and the run goes on; tracks without a known duration get a
//! random, plausible one.
//!
//! Network calls happen in [`gather`]; [`Gathered::assemble`] is pure apart
//! from the injected random source.

pub mod assemble;
pub mod durations;
pub mod expand;
pub mod search;

use std::sync::Arc;

use rand::Rng;

use crate::{
    config,
    error::{PipelineError, Result},
    genre, info,
    types::{
        ANY_SUB_GENRE, CategoryQuery, DurationBounds, DurationSeconds, MediaEntry, MusicResponse,
        Preferences, ResolvedQuery, Track,
    },
    youtube::VideoSource,
};

/// Playlists taken from the playlist search.
pub const PLAYLIST_SEARCH_LIMIT: u32 = 10;
/// Entries taken from every playlist.
pub const ENTRIES_PER_PLAYLIST: u32 = 10;
/// Videos taken from the direct search fallback.
pub const FALLBACK_SEARCH_LIMIT: u32 = 15;
/// Distinct ids looked up for durations per run.
pub const MAX_DURATION_IDS: usize = 50;
/// Ids per `videos` call.
pub const DURATION_CHUNK_SIZE: usize = crate::youtube::MAX_VIDEO_IDS_PER_CALL;

/// Everything fetched from upstream for one run.
#[derive(Debug, Clone)]
pub struct Gathered {
    pub query: CategoryQuery,
    pub resolved: ResolvedQuery,
    pub entries: Vec<MediaEntry>,
    pub durations: DurationSeconds,
}

/// Result of one run.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub query: CategoryQuery,
    pub search_query: String,
    pub bounds: DurationBounds,
    pub tracks: Vec<Track>,
}

impl Gathered {
    /// Builds and filters the tracks, drawing estimated durations from `rng`.
    pub fn assemble<R: Rng>(self, rng: &mut R) -> Resolution {
        let bounds = self.query.duration_bounds();
        let tracks = assemble::assemble(&self.entries, &self.durations, &self.query, &bounds, rng);

        Resolution {
            query: self.query,
            search_query: self.resolved.search_phrase,
            bounds,
            tracks,
        }
    }
}

impl Resolution {
    pub fn into_response(self) -> MusicResponse {
        MusicResponse {
            tracks: self.tracks,
            genre: self.query.raw_genre,
            search_query: self.search_query,
            mode: self.query.mode,
            song_genre: self
                .query
                .sub_genre
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| ANY_SUB_GENRE.to_string()),
            preferences: Preferences {
                min_duration: self.bounds.min_minutes,
                max_duration: self.bounds.max_minutes,
                min_seconds: self.bounds.min_seconds(),
                max_seconds: self.bounds.max_seconds(),
                all_durations: self.query.include_all_durations,
            },
        }
    }
}

/// Runs every network stage for `query`.
///
/// # Errors
///
/// - [`PipelineError::ClientInput`] for an empty genre
/// - [`PipelineError::UpstreamSearch`] when the playlist search fails
pub async fn gather(
    source: Arc<dyn VideoSource>,
    query: &CategoryQuery,
    concurrency: usize,
) -> Result<Gathered> {
    if query.raw_genre.trim().is_empty() {
        return Err(PipelineError::ClientInput(
            "Genre parameter is required".to_string(),
        ));
    }

    let resolved = genre::resolve_query(query);
    info!(
        "Resolving {} music for \"{}\" with \"{}\"",
        query.mode, query.raw_genre, resolved.search_phrase
    );

    let candidates = search::search_playlists(source.as_ref(), &resolved.search_phrase).await?;
    let mut entries = expand::expand_playlists(Arc::clone(&source), &candidates, concurrency).await;
    info!(
        "{} playlists expanded into {} entries",
        candidates.len(),
        entries.len()
    );

    if entries.is_empty() {
        let raw_query = query
            .fallback_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(&resolved.search_phrase);
        entries = search::fallback_search(source.as_ref(), raw_query).await;
    }

    let durations = durations::resolve_durations(Arc::clone(&source), &entries, concurrency).await;
    info!(
        "Resolved {} durations for {} entries",
        durations.len(),
        entries.len()
    );

    Ok(Gathered {
        query: query.clone(),
        resolved,
        entries,
        durations,
    })
}

/// Resolves `query` into tracks using the configured concurrency and the
/// thread-local random source for estimated durations.
pub async fn resolve_tracks(
    source: Arc<dyn VideoSource>,
    query: &CategoryQuery,
) -> Result<Resolution> {
    let gathered = gather(source, query, config::max_concurrent_fetches()).await?;
    Ok(gathered.assemble(&mut rand::rng()))
}
