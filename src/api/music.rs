use std::{str::FromStr, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::AppState;
use crate::{
    error::{PipelineError, Result},
    pipeline,
    types::{CategoryQuery, DurationBounds, ErrorResponse, Mode, MusicParams, MusicResponse},
    utils, warning,
};

pub async fn music(
    Query(params): Query<MusicParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match handle(params, &state).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => error_response(e),
    }
}

async fn handle(params: MusicParams, state: &AppState) -> Result<MusicResponse> {
    let query = parse_params(params)?;

    let Some(source) = state.source.clone() else {
        return Err(PipelineError::Configuration(
            "YouTube API key not configured".to_string(),
        ));
    };

    let resolution = pipeline::resolve_tracks(source, &query).await?;
    Ok(resolution.into_response())
}

fn error_response(e: PipelineError) -> Response {
    if let PipelineError::UpstreamSearch(source) = &e {
        warning!("Playlist search failed: {}", source);
    }

    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse {
        error: e.to_string(),
        tracks: Vec::new(),
    };
    (status, Json(body)).into_response()
}

/// Validates the raw query string of `GET /api/music`.
///
/// # Errors
///
/// [`PipelineError::ClientInput`] for a missing genre, an unknown type, or
/// duration bounds that are not whole minutes up to a day.
pub fn parse_params(params: MusicParams) -> Result<CategoryQuery> {
    let raw_genre = params
        .genre
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .ok_or_else(|| PipelineError::ClientInput("Genre parameter is required".to_string()))?;

    let mode = match params.kind.as_deref().map(str::trim) {
        None | Some("") => Mode::default(),
        Some(kind) => Mode::from_str(kind).map_err(PipelineError::ClientInput)?,
    };

    Ok(CategoryQuery {
        raw_genre,
        mode,
        sub_genre: non_blank(params.song_genre),
        include_all_durations: utils::parse_flag(params.all_durations.as_deref()),
        keywords: non_blank(params.keywords),
        min_minutes: parse_minutes("minDuration", params.min_duration)?,
        max_minutes: parse_minutes("maxDuration", params.max_duration)?,
        fallback_query: non_blank(params.q),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_minutes(name: &str, value: Option<String>) -> Result<Option<u64>> {
    let Some(v) = non_blank(value) else {
        return Ok(None);
    };

    match v.parse::<u64>() {
        Ok(minutes) if minutes <= DurationBounds::MAX_MINUTES => Ok(Some(minutes)),
        Ok(_) => Err(PipelineError::ClientInput(format!(
            "{} must be at most {} minutes, got '{}'",
            name,
            DurationBounds::MAX_MINUTES,
            v
        ))),
        Err(_) => Err(PipelineError::ClientInput(format!(
            "{} must be a whole number of minutes, got '{}'",
            name, v
        ))),
    }
}
