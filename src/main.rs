use std::str::FromStr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use chapterbeats::{
    cli, config, error,
    types::{CategoryQuery, DurationBounds, Mode},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the HTTP API
    Serve,

    /// Resolve a book genre into tracks
    Resolve(ResolveOptions),

    /// List known genres and their search phrases
    Genres,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Book genre, e.g. "Science Fiction"
    genre: String,

    /// Kind of music: background or songs
    #[clap(long = "type", default_value = "background", value_parser = Mode::from_str)]
    mode: Mode,

    /// Song style every track has to mention (songs only)
    #[clap(long, default_value = "any")]
    song_genre: String,

    /// Keep tracks of any duration
    #[clap(long)]
    all_durations: bool,

    /// Lower duration bound in minutes
    #[clap(long, value_parser = clap::value_parser!(u64).range(..=DurationBounds::MAX_MINUTES))]
    min_duration: Option<u64>,

    /// Upper duration bound in minutes
    #[clap(long, value_parser = clap::value_parser!(u64).range(..=DurationBounds::MAX_MINUTES))]
    max_duration: Option<u64>,

    /// Extra search words, required in every track
    #[clap(long)]
    keywords: Option<String>,

    /// Raw query for the direct video search fallback
    #[clap(long)]
    query: Option<String>,

    /// Open the first track in the browser
    #[clap(long)]
    open: bool,
}

impl From<ResolveOptions> for CategoryQuery {
    fn from(opt: ResolveOptions) -> Self {
        CategoryQuery {
            raw_genre: opt.genre,
            mode: opt.mode,
            sub_genre: Some(opt.song_genre),
            include_all_durations: opt.all_durations,
            keywords: opt.keywords,
            min_minutes: opt.min_duration,
            max_minutes: opt.max_duration,
            fallback_query: opt.query,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::Resolve(opt) => {
            let open = opt.open;
            cli::resolve(opt.into(), open).await
        }
        Command::Genres => cli::genres().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
