use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

// ---------------------------------------------------------------------------
// YouTube Data API wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    pub video_owner_channel_title: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub snippet: Option<Snippet>,
    pub content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: String,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

/// What a search call should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Playlist,
    Video,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Playlist => write!(f, "playlist"),
            SearchKind::Video => write!(f, "video"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline types
// ---------------------------------------------------------------------------

/// Kind of music requested for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ambient/instrumental music, long tracks
    #[default]
    Background,
    /// Vocal songs of regular length
    Songs,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Background => write!(f, "background"),
            Mode::Songs => write!(f, "songs"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(Mode::Background),
            "songs" => Ok(Mode::Songs),
            other => Err(format!(
                "Invalid type '{}'. Expected 'background' or 'songs'",
                other
            )),
        }
    }
}

/// Sub-genre value meaning "no sub-genre filter".
pub const ANY_SUB_GENRE: &str = "any";

/// Input of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub raw_genre: String,
    pub mode: Mode,
    pub sub_genre: Option<String>,
    pub include_all_durations: bool,
    /// Extra search words, also required in title/artist of every track
    pub keywords: Option<String>,
    pub min_minutes: Option<u64>,
    pub max_minutes: Option<u64>,
    /// Raw query for the direct video search fallback
    pub fallback_query: Option<String>,
}

impl CategoryQuery {
    pub fn new(raw_genre: impl Into<String>) -> Self {
        Self {
            raw_genre: raw_genre.into(),
            ..Default::default()
        }
    }

    /// Sub-genre token to filter song tracks by, lower-cased.
    ///
    /// `None` in background mode, or when the sub-genre is unset or "any".
    pub fn sub_genre_filter(&self) -> Option<String> {
        if self.mode != Mode::Songs {
            return None;
        }
        self.sub_genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case(ANY_SUB_GENRE))
            .map(str::to_lowercase)
    }

    /// Whitespace-separated, lower-cased keywords; empty when none were given.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Effective duration window: mode defaults, caller overrides, min/max
    /// swapped if given the wrong way round.
    pub fn duration_bounds(&self) -> DurationBounds {
        let defaults = DurationBounds::for_mode(self.mode);
        let min = self.min_minutes.unwrap_or(defaults.min_minutes);
        let max = self.max_minutes.unwrap_or(defaults.max_minutes);
        if min > max {
            DurationBounds {
                min_minutes: max,
                max_minutes: min,
            }
        } else {
            DurationBounds {
                min_minutes: min,
                max_minutes: max,
            }
        }
    }
}

/// Inclusive duration window in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBounds {
    pub min_minutes: u64,
    pub max_minutes: u64,
}

impl DurationBounds {
    pub const BACKGROUND: DurationBounds = DurationBounds {
        min_minutes: 30,
        max_minutes: 240,
    };
    pub const SONGS: DurationBounds = DurationBounds {
        min_minutes: 0,
        max_minutes: 10,
    };
    /// Largest bound a caller may request: one day.
    pub const MAX_MINUTES: u64 = 24 * 60;

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Background => Self::BACKGROUND,
            Mode::Songs => Self::SONGS,
        }
    }

    pub fn min_seconds(&self) -> u64 {
        self.min_minutes.saturating_mul(60)
    }

    pub fn max_seconds(&self) -> u64 {
        self.max_minutes.saturating_mul(60)
    }

    pub fn contains(&self, seconds: u64) -> bool {
        seconds >= self.min_seconds() && seconds <= self.max_seconds()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub search_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCandidate {
    pub playlist_id: String,
}

/// A video found in a playlist or by the fallback search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub item_id: String,
    pub title_text: String,
    pub owner_text: String,
    pub thumbnail_url: Option<String>,
}

/// Resolved durations in seconds by video id. Missing ids are unknown.
pub type DurationSeconds = HashMap<String, u64>;

/// Final output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_label: String,
    pub duration_seconds: u64,
    pub thumbnail_url: Option<String>,
    pub external_url: String,
    pub is_first: bool,
    pub mode: Mode,
    pub sub_genre: Option<String>,
}

// ---------------------------------------------------------------------------
// HTTP request/response payloads
// ---------------------------------------------------------------------------

/// Query string of `GET /api/music`. Everything is kept as raw text so that
/// bad values produce a JSON error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicParams {
    pub genre: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub song_genre: Option<String>,
    pub all_durations: Option<String>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
    pub keywords: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponse {
    pub tracks: Vec<Track>,
    pub genre: String,
    pub search_query: String,
    #[serde(rename = "type")]
    pub mode: Mode,
    pub song_genre: String,
    pub preferences: Preferences,
}

/// Echo of the effective duration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub min_duration: u64,
    pub max_duration: u64,
    pub min_seconds: u64,
    pub max_seconds: u64,
    pub all_durations: bool,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `false` while no API key is configured
    pub upstream_configured: bool,
    pub max_concurrent_fetches: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub tracks: Vec<Track>,
}

// ---------------------------------------------------------------------------
// CLI tables
// ---------------------------------------------------------------------------

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub background: String,
    pub songs: String,
}
