use rand::Rng;

use crate::{
    types::{CategoryQuery, DurationBounds, DurationSeconds, MediaEntry, Mode, Track},
    utils,
};

/// Estimated background tracks never exceed an hour.
const BACKGROUND_ESTIMATE_MAX_MINUTES: u64 = 60;
/// Estimated songs last two to four minutes.
const SONG_ESTIMATE_MINUTES: (u64, u64) = (2, 4);

/// Builds, de-duplicates and filters the tracks of one run.
///
/// Order follows `entries`; the first surviving track is marked as first.
pub fn assemble<R: Rng>(
    entries: &[MediaEntry],
    durations: &DurationSeconds,
    query: &CategoryQuery,
    bounds: &DurationBounds,
    rng: &mut R,
) -> Vec<Track> {
    let mut tracks = build_tracks(entries, durations, query, bounds, rng);
    utils::remove_duplicate_tracks(&mut tracks);

    let mut tracks = filter_tracks(tracks, query, bounds);
    for (index, track) in tracks.iter_mut().enumerate() {
        track.is_first = index == 0;
    }
    tracks
}

/// One track per entry. Entries without a positive resolved duration get
/// an estimate from [`estimate_seconds`].
pub fn build_tracks<R: Rng>(
    entries: &[MediaEntry],
    durations: &DurationSeconds,
    query: &CategoryQuery,
    bounds: &DurationBounds,
    rng: &mut R,
) -> Vec<Track> {
    let sub_genre = query.sub_genre_filter();

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let seconds = match durations.get(&entry.item_id) {
                Some(&seconds) if seconds > 0 => seconds,
                _ => estimate_seconds(query.mode, bounds, rng),
            };

            Track {
                id: entry.item_id.clone(),
                title: entry.title_text.clone(),
                artist: entry.owner_text.clone(),
                duration_label: utils::format_duration(seconds),
                duration_seconds: seconds,
                thumbnail_url: entry.thumbnail_url.clone(),
                external_url: utils::watch_url(&entry.item_id),
                is_first: index == 0,
                mode: query.mode,
                sub_genre: sub_genre.clone(),
            }
        })
        .collect()
}

/// Random but plausible duration for a track the upstream gave none for.
///
/// Background: whole minutes in `[max(1, min), min(max, 60)]`, songs: two to
/// four minutes, both plus 0-59 seconds. The result is capped at the
/// window's upper bound when the drawn minute lies inside the window.
pub fn estimate_seconds<R: Rng>(mode: Mode, bounds: &DurationBounds, rng: &mut R) -> u64 {
    let (low, high) = match mode {
        Mode::Background => {
            let low = bounds.min_minutes.max(1);
            let high = bounds.max_minutes.min(BACKGROUND_ESTIMATE_MAX_MINUTES);
            (low, high.max(low))
        }
        Mode::Songs => SONG_ESTIMATE_MINUTES,
    };

    let minutes = rng.random_range(low..=high);
    let offset = rng.random_range(0..=59u64);
    let seconds = minutes.saturating_mul(60).saturating_add(offset);

    if bounds.contains(minutes.saturating_mul(60)) {
        seconds.min(bounds.max_seconds())
    } else {
        seconds
    }
}

/// Applies the duration window (unless all durations were requested), the
/// song sub-genre and the keyword filters. Survivors keep their order.
pub fn filter_tracks(
    tracks: Vec<Track>,
    query: &CategoryQuery,
    bounds: &DurationBounds,
) -> Vec<Track> {
    let tracks = if query.include_all_durations {
        tracks
    } else {
        filter_by_duration(tracks, bounds)
    };

    let sub_genre = query.sub_genre_filter();
    let keywords = query.keyword_list();

    tracks
        .into_iter()
        .filter(|track| {
            let haystack = format!("{} {}", track.title, track.artist).to_lowercase();
            let genre_ok = sub_genre
                .as_deref()
                .is_none_or(|genre| haystack.contains(genre));
            let keywords_ok = keywords.iter().all(|kw| haystack.contains(kw.as_str()));
            genre_ok && keywords_ok
        })
        .collect()
}

/// Drops tracks lasting 0 seconds or falling outside the window.
pub fn filter_by_duration(tracks: Vec<Track>, bounds: &DurationBounds) -> Vec<Track> {
    tracks
        .into_iter()
        .filter(|t| t.duration_seconds > 0 && bounds.contains(t.duration_seconds))
        .collect()
}
