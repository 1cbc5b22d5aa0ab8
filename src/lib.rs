//! chapterbeats library
//!
//! Turns the genre of a book into a list of reading music tracks. A genre is
//! mapped to a search phrase, playlists matching that phrase are looked up on
//! YouTube, their entries are expanded, durations are resolved in batches and
//! the resulting tracks are filtered to the requested duration window.
//!
//! # Modules
//!
//! - `api` - HTTP handlers served by `chapterbeats serve`
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for upstream calls and the resolution pipeline
//! - `genre` - Genre tables and search query composition
//! - `pipeline` - The multi-stage track resolution pipeline
//! - `server` - Router construction and HTTP server start-up
//! - `types` - Data structures and type definitions
//! - `utils` - Duration parsing/rendering and other helpers
//! - `youtube` - YouTube Data API client
//!
//! # Example
//!
//! ```
//! use chapterbeats::{config, pipeline, types::CategoryQuery};
//!
//! #[tokio::main]
//! async fn main() -> chapterbeats::Res<()> {
//!     config::load_env().await?;
//!     let source = chapterbeats::youtube::YouTubeClient::from_env()?;
//!     let resolution = pipeline::resolve_tracks(source.shared(), &CategoryQuery::new("Romance")).await?;
//!     println!("{} tracks", resolution.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod genre;
pub mod pipeline;
pub mod server;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for plumbing code (server start-up, CLI).
///
/// Pipeline stages return the typed errors from [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the binary front-end: request handling never calls this,
/// it returns an [`error::PipelineError`] instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures, e.g. a single playlist that could not be
/// expanded.
///
/// ```
/// warning!("Skipping playlist {}: {}", playlist_id, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
