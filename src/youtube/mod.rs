//! # YouTube Integration Module
//!
//! Client for the three YouTube Data API v3 operations the resolution
//! pipeline consumes:
//!
//! - `GET /search` - free text search for playlists or videos
//! - `GET /playlistItems` - members of one playlist
//! - `GET /videos` - `contentDetails` (duration) for up to 50 ids per call
//!
//! ```text
//! Pipeline stages (search, expand, durations)
//!          ↓
//! VideoSource trait
//!          ↓
//! YouTubeClient (reqwest, JSON)
//!          ↓
//! YouTube Data API
//! ```
//!
//! Stages only see the [`VideoSource`] trait, tests plug in in-memory
//! sources. Every call returns an [`ApiError`](crate::error::ApiError) on
//! failure; whether that failure is fatal is decided by the calling stage.
//! Calls are never retried and are bounded by the client timeout
//! (`UPSTREAM_TIMEOUT_SECS`).

mod client;
mod playlist_items;
mod search;
mod videos;

pub use client::{VideoSource, YouTubeClient};

/// Most ids the `videos` endpoint accepts per call.
pub const MAX_VIDEO_IDS_PER_CALL: usize = 50;
