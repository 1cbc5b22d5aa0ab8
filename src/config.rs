//! Configuration management for chapterbeats.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The YouTube API key has no default. Its absence is not fatal at start-up;
//! every request made without it is answered with a configuration error.

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/chapterbeats/.env`
/// - macOS: `~/Library/Application Support/chapterbeats/.env`
/// - Windows: `%LOCALAPPDATA%/chapterbeats/.env`
///
/// The directory is created when missing. A missing `.env` file is fine,
/// variables may come straight from the process environment.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chapterbeats/.env");
    path
}

/// Returns the address `chapterbeats serve` binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the YouTube Data API key, if one is configured.
///
/// Reads `YOUTUBE_API_KEY`. Empty values count as missing.
pub fn youtube_api_key() -> Option<String> {
    env::var("YOUTUBE_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Returns the YouTube Data API base URL without a trailing slash.
pub fn youtube_api_url() -> String {
    env::var("YOUTUBE_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Timeout applied to every single upstream call.
///
/// Reads `UPSTREAM_TIMEOUT_SECS`; unparsable or zero values fall back to
/// [`DEFAULT_UPSTREAM_TIMEOUT_SECS`].
pub fn upstream_timeout() -> Duration {
    let secs = env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Upper bound of playlist/duration fetches running at the same time.
///
/// Reads `MAX_CONCURRENT_FETCHES`; unparsable or zero values fall back to
/// [`DEFAULT_MAX_CONCURRENT_FETCHES`].
pub fn max_concurrent_fetches() -> usize {
    env::var("MAX_CONCURRENT_FETCHES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES)
}
