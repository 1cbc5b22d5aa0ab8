//! Error types for upstream calls and the resolution pipeline.

use thiserror::Error;

/// Failure of a single call against the YouTube Data API.
///
/// Whether it is fatal depends on the stage: the playlist search turns it
/// into [`PipelineError::UpstreamSearch`], every other stage logs it and
/// carries on with whatever succeeded.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure, timeout or undecodable body
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Body decoded but did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Call rejected locally before reaching the upstream
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that abort a resolution request.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A required request parameter is missing or invalid
    #[error("{0}")]
    ClientInput(String),

    /// The service is missing configuration, e.g. the API key
    #[error("{0}")]
    Configuration(String),

    /// The playlist search itself failed
    #[error("Failed to fetch music")]
    UpstreamSearch(#[source] ApiError),
}

impl PipelineError {
    /// HTTP status code the API layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            PipelineError::ClientInput(_) => 400,
            PipelineError::Configuration(_) => 500,
            PipelineError::UpstreamSearch(_) => 500,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
