use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, error::PipelineError, pipeline, success, types::CategoryQuery, utils, warning,
    youtube::YouTubeClient,
};

pub async fn resolve(query: CategoryQuery, open: bool) {
    let source = match YouTubeClient::from_env() {
        Ok(client) => client.shared(),
        Err(e) => error!(
            "{}. Set YOUTUBE_API_KEY in {}",
            e,
            config::env_path().display()
        ),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Resolving {} music for {}...", query.mode, query.raw_genre));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = pipeline::resolve_tracks(source, &query).await;
    pb.finish_and_clear();

    let resolution = match result {
        Ok(resolution) => resolution,
        Err(PipelineError::UpstreamSearch(e)) => error!("Failed to fetch music: {}", e),
        Err(e) => error!("{}", e),
    };

    if resolution.tracks.is_empty() {
        warning!(
            "No music matches your filter preferences (searched for \"{}\")",
            resolution.search_query
        );
        return;
    }

    println!(
        "{}",
        Table::new(utils::track_table_rows(&resolution.tracks))
    );
    success!(
        "{} tracks between {} and {} minutes for \"{}\"",
        resolution.tracks.len(),
        resolution.bounds.min_minutes,
        resolution.bounds.max_minutes,
        resolution.search_query
    );

    if open {
        if let Some(first) = resolution.tracks.first() {
            if let Err(e) = webbrowser::open(&first.external_url) {
                warning!("Cannot open browser: {}", e);
            }
        }
    }
}
