//! # CLI Module
//!
//! User-facing commands of the `chapterbeats` binary:
//!
//! - [`serve`] - runs the HTTP API (`GET /api/music`, `GET /health`)
//! - [`resolve`] - resolves one genre and prints the tracks as a table
//! - [`genres`] - lists the known genres and their search phrases
//!
//! Commands report progress with the crate's `info!`/`success!`/`warning!`
//! macros and end the process through `error!` on fatal failures.
//!
//! ```bash
//! chapterbeats genres
//! chapterbeats resolve "Science Fiction" --type songs --song-genre electronic
//! chapterbeats serve
//! ```

mod genres;
mod resolve;
mod serve;

pub use genres::genres;
pub use resolve::resolve;
pub use serve::serve;
