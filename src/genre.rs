//! Genre tables and search query composition.
//!
//! Book categories arrive as free text ("Fiction / Romance / Historical",
//! "General Fiction", ...). They are mapped onto one of two fixed tables,
//! one phrased for instrumental background music and one for vocal songs.

use crate::types::{CategoryQuery, Mode, ResolvedQuery};

/// Read-only genre to search phrase mapping.
///
/// Lookups walk `entries` in order, so earlier entries win ties.
#[derive(Debug)]
pub struct GenreTable {
    pub entries: &'static [(&'static str, &'static str)],
    pub default_phrase: &'static str,
}

pub static BACKGROUND_TABLE: GenreTable = GenreTable {
    entries: &[
        ("Fiction", "ambient lo-fi study music"),
        ("Romance", "romantic piano instrumental"),
        ("Science Fiction", "synthwave cyberpunk ambient"),
        ("Fantasy", "epic fantasy orchestral"),
        ("Mystery", "dark mysterious ambient"),
        ("Thriller", "suspenseful cinematic"),
        ("Horror", "dark horror ambient"),
        ("Historical Fiction", "classical period music"),
        ("Young Adult Fiction", "indie instrumental"),
        ("Biography", "inspiring instrumental"),
        ("Self-Help", "calm meditation music"),
        ("Business", "focus productivity music"),
        ("Science", "ambient space music"),
        ("Philosophy", "contemplative classical"),
        ("Poetry", "emotional piano"),
        ("Drama", "emotional cinematic"),
        ("Adventure", "epic adventure orchestral"),
        ("Crime", "noir jazz"),
        ("Dystopian", "dark electronic ambient"),
        ("Paranormal", "ethereal ambient"),
        ("Contemporary", "modern indie instrumental"),
        ("Literary Fiction", "sophisticated jazz"),
        ("Classics", "timeless classical"),
    ],
    default_phrase: "ambient reading music",
};

pub static SONGS_TABLE: GenreTable = GenreTable {
    entries: &[
        ("Fiction", "indie pop songs"),
        ("Romance", "love songs romantic playlist"),
        ("Science Fiction", "electronic pop songs"),
        ("Fantasy", "epic pop songs"),
        ("Mystery", "alternative rock songs"),
        ("Thriller", "intense rock songs"),
        ("Horror", "dark alternative songs"),
        ("Historical Fiction", "classic songs"),
        ("Young Adult Fiction", "pop hits playlist"),
        ("Biography", "inspiring pop songs"),
        ("Self-Help", "uplifting pop songs"),
        ("Business", "motivational songs"),
        ("Science", "electronic songs"),
        ("Philosophy", "indie folk songs"),
        ("Poetry", "emotional ballads"),
        ("Drama", "powerful ballads"),
        ("Adventure", "energetic pop songs"),
        ("Crime", "rock songs"),
        ("Dystopian", "alternative pop songs"),
        ("Paranormal", "ethereal pop songs"),
        ("Contemporary", "modern pop hits"),
        ("Literary Fiction", "indie songs"),
        ("Classics", "timeless songs"),
    ],
    default_phrase: "pop songs playlist",
};

/// Background tokens added once the minimum duration asks for long tracks.
pub const EXTENDED_DURATION_HINT: &str = "long version extended";
pub const EXTENDED_DURATION_MIN_MINUTES: u64 = 10;
pub const PLAYLIST_HINT: &str = "playlist";

pub fn table_for(mode: Mode) -> &'static GenreTable {
    match mode {
        Mode::Background => &BACKGROUND_TABLE,
        Mode::Songs => &SONGS_TABLE,
    }
}

/// Maps a raw category onto a search phrase. Never fails.
///
/// 1. exact case-insensitive key match
/// 2. first key (in table order) that contains the input or is contained in it
/// 3. the table's default phrase
pub fn resolve(raw_genre: &str, table: &GenreTable) -> &'static str {
    let needle = raw_genre.trim().to_lowercase();
    if needle.is_empty() {
        return table.default_phrase;
    }

    if let Some((_, phrase)) = table
        .entries
        .iter()
        .find(|(key, _)| key.to_lowercase() == needle)
    {
        return *phrase;
    }

    table
        .entries
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            key.contains(&needle) || needle.contains(&key)
        })
        .map(|(_, phrase)| *phrase)
        .unwrap_or(table.default_phrase)
}

/// Composes the search string sent to the playlist search.
///
/// `<phrase> [keywords] [sub-genre] playlist [long version extended]`, where
/// the sub-genre only applies to songs and the extended hint only to
/// background music with a minimum of at least ten minutes.
pub fn build_query(phrase: &str, query: &CategoryQuery) -> ResolvedQuery {
    let mut parts: Vec<String> = vec![phrase.trim().to_string()];

    if let Some(keywords) = query.keywords.as_deref().map(str::trim) {
        if !keywords.is_empty() {
            parts.push(keywords.to_string());
        }
    }

    if let Some(sub_genre) = query.sub_genre_filter() {
        parts.push(sub_genre);
    }

    let has_playlist_token = phrase
        .split_whitespace()
        .any(|w| w.eq_ignore_ascii_case(PLAYLIST_HINT));
    if !has_playlist_token {
        parts.push(PLAYLIST_HINT.to_string());
    }

    if query.mode == Mode::Background
        && query.duration_bounds().min_minutes >= EXTENDED_DURATION_MIN_MINUTES
    {
        parts.push(EXTENDED_DURATION_HINT.to_string());
    }

    ResolvedQuery {
        search_phrase: parts.join(" "),
    }
}

/// Resolves the genre for the query's mode and composes the search string.
pub fn resolve_query(query: &CategoryQuery) -> ResolvedQuery {
    let phrase = resolve(&query.raw_genre, table_for(query.mode));
    build_query(phrase, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keys_map_to_their_phrase() {
        for table in [&BACKGROUND_TABLE, &SONGS_TABLE] {
            for (key, phrase) in table.entries {
                assert_eq!(resolve(key, table), *phrase);
                assert_eq!(resolve(&key.to_uppercase(), table), *phrase);
            }
        }
    }

    #[test]
    fn unknown_genre_falls_back_to_default() {
        assert_eq!(resolve("Cookbooks", &BACKGROUND_TABLE), "ambient reading music");
        assert_eq!(resolve("Cookbooks", &SONGS_TABLE), "pop songs playlist");
        assert_eq!(resolve("   ", &BACKGROUND_TABLE), "ambient reading music");
    }

    #[test]
    fn substring_match_takes_first_key_in_order() {
        // "General Fiction" contains "Fiction", the first entry
        assert_eq!(
            resolve("General Fiction", &BACKGROUND_TABLE),
            "ambient lo-fi study music"
        );
        // "Hard Science Fiction" contains "Fiction" before "Science Fiction"
        assert_eq!(
            resolve("Hard Science Fiction", &BACKGROUND_TABLE),
            "ambient lo-fi study music"
        );
        // input contained in a key
        assert_eq!(resolve("dystop", &SONGS_TABLE), "alternative pop songs");
    }

    #[test]
    fn background_query_carries_extension_tokens() {
        let query = CategoryQuery::new("Romance");
        let resolved = resolve_query(&query);
        assert_eq!(
            resolved.search_phrase,
            "romantic piano instrumental playlist long version extended"
        );
    }

    #[test]
    fn short_background_minimum_skips_extended_hint() {
        let query = CategoryQuery {
            min_minutes: Some(3),
            ..CategoryQuery::new("Crime")
        };
        assert_eq!(resolve_query(&query).search_phrase, "noir jazz playlist");
    }

    #[test]
    fn songs_query_appends_sub_genre_and_keywords() {
        let query = CategoryQuery {
            mode: Mode::Songs,
            sub_genre: Some("Jazz".to_string()),
            keywords: Some(" night ".to_string()),
            ..CategoryQuery::new("Crime")
        };
        assert_eq!(
            resolve_query(&query).search_phrase,
            "rock songs night jazz playlist"
        );
    }

    #[test]
    fn songs_query_ignores_any_sub_genre_and_existing_playlist_token() {
        let query = CategoryQuery {
            mode: Mode::Songs,
            sub_genre: Some("any".to_string()),
            ..CategoryQuery::new("Romance")
        };
        assert_eq!(
            resolve_query(&query).search_phrase,
            "love songs romantic playlist"
        );
    }
}
