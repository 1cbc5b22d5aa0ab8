use std::collections::HashSet;

use crate::types::{MediaEntry, Thumbnails, Track, TrackTableRow};

/// Parses a YouTube `contentDetails.duration` value into seconds.
///
/// Accepts `PT[nH][nM][nS]` where every component is optional but the ones
/// present keep that order. Anything else, including day components such as
/// `P1DT2H` or the live stream marker `P0D`, yields 0.
pub fn parse_iso_duration(value: &str) -> u64 {
    let Some(rest) = value.trim().strip_prefix("PT") else {
        return 0;
    };

    let mut total: u64 = 0;
    let mut digits = String::new();
    // index into "HMS" of the last unit seen, units may not repeat or go back
    let mut next_unit = 0;

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let (unit, factor) = match c {
            'H' => (0, 3600),
            'M' => (1, 60),
            'S' => (2, 1),
            _ => return 0,
        };
        if digits.is_empty() || unit < next_unit {
            return 0;
        }
        let Ok(amount) = digits.parse::<u64>() else {
            return 0;
        };
        total = total.saturating_add(amount.saturating_mul(factor));
        digits.clear();
        next_unit = unit + 1;
    }

    if !digits.is_empty() {
        return 0;
    }
    total
}

/// Renders seconds as `H:MM:SS`, or `M:SS` below one hour.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Unique non-empty item ids in first-seen order, at most `cap` of them.
pub fn unique_item_ids(entries: &[MediaEntry], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|e| e.item_id.as_str())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// Splits ids into consecutive chunks of at most `chunk_size` ids.
pub fn chunk_ids(ids: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    ids.chunks(chunk_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Keeps the first track for every id.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Largest available thumbnail URL: high, then medium, then default.
pub fn best_thumbnail(thumbnails: Option<&Thumbnails>) -> Option<String> {
    let thumbnails = thumbnails?;
    [&thumbnails.high, &thumbnails.medium, &thumbnails.default]
        .into_iter()
        .flatten()
        .map(|t| t.url.trim())
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Lenient boolean for query strings: `true`, `1`, `yes` and `on`.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title.clone(),
            artist: t.artist.clone(),
            duration: t.duration_label.clone(),
            url: t.external_url.clone(),
        })
        .collect()
}
