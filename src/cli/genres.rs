use tabled::Table;

use crate::{
    genre::{BACKGROUND_TABLE, SONGS_TABLE, resolve},
    types::GenreTableRow,
};

pub async fn genres() {
    let mut rows: Vec<GenreTableRow> = BACKGROUND_TABLE
        .entries
        .iter()
        .map(|(genre, background)| GenreTableRow {
            genre: genre.to_string(),
            background: background.to_string(),
            songs: resolve(genre, &SONGS_TABLE).to_string(),
        })
        .collect();

    rows.push(GenreTableRow {
        genre: "(anything else)".to_string(),
        background: BACKGROUND_TABLE.default_phrase.to_string(),
        songs: SONGS_TABLE.default_phrase.to_string(),
    });

    println!("{}", Table::new(rows));
}
