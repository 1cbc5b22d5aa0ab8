//! # API Module
//!
//! HTTP endpoints served by `chapterbeats serve`:
//!
//! - [`health`] - `GET /health`, liveness, version and upstream configuration
//! - [`music`] - `GET /api/music`, resolves a book genre into tracks
//!
//! ## `GET /api/music`
//!
//! | parameter      | default      | meaning                                      |
//! |----------------|--------------|----------------------------------------------|
//! | `genre`        | required     | book category, free text                     |
//! | `type`         | `background` | `background` or `songs`                      |
//! | `songGenre`    | `any`        | song style every track must mention          |
//! | `allDurations` | `false`      | skip the duration window                     |
//! | `minDuration`  | per type     | lower bound in minutes                       |
//! | `maxDuration`  | per type     | upper bound in minutes                       |
//! | `keywords`     | none         | extra search words, required in every track  |
//! | `q`            | search query | raw query for the direct video search        |
//!
//! Errors are answered with `{ "error": "...", "tracks": [] }`: 400 for bad
//! parameters, 500 for a missing API key or a failed playlist search.

mod health;
mod music;

use std::sync::Arc;

pub use health::health;
pub use music::{music, parse_params};

use crate::youtube::VideoSource;

/// Shared by all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no API key is configured
    pub source: Option<Arc<dyn VideoSource>>,
}

impl AppState {
    pub fn new(source: Option<Arc<dyn VideoSource>>) -> Self {
        Self { source }
    }
}
