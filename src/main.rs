//! cliordle - CLI
//!
//! Play Wordle in the terminal, tweak display settings and view statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cliordle::{
    commands::{PlayConfig, SettingsUpdate, run_play, run_settings, run_stats},
    player::{JsonFileStore, Session, store::default_path},
    wordlists::{WordList, loader::load_from_file},
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cliordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player record file (default: <data dir>/cliordle/player.json)
    #[arg(long, global = true, env = "CLIORDLE_DB")]
    db: Option<PathBuf>,

    /// Accepted guesses: 'all' (default, embedded list) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Never clear the screen between guesses
    #[arg(long, global = true)]
    no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round (default)
    Play,

    /// Show or change settings
    Settings {
        /// Colorblind-friendly colors
        #[arg(long, value_enum)]
        high_contrast: Option<Toggle>,

        /// Hard mode flag (stored and displayed only)
        #[arg(long, value_enum)]
        hard_mode: Option<Toggle>,
    },

    /// Show statistics
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    #[value(alias = "true")]
    On,
    #[value(alias = "false")]
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        matches!(toggle, Toggle::On)
    }
}

/// Build the dictionary based on the -w flag
///
/// - "all": embedded answers and accepted guesses
/// - "<path>": embedded answers, accepted guesses read from the file
fn load_dictionary(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "all" => Ok(WordList::embedded()),
        path => {
            let guesses = load_from_file(path)
                .with_context(|| format!("could not read word list {path}"))?;
            Ok(WordList::with_guesses(guesses))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let db_path = cli.db.clone().unwrap_or_else(default_path);
    log::debug!("using player record {}", db_path.display());
    let mut session =
        Session::open(JsonFileStore::new(db_path)).context("could not load player record")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let config = PlayConfig {
                clear_screen: !cli.no_clear && io::stdout().is_terminal(),
            };
            let stdin = io::stdin();
            run_play(&mut session, &dictionary, &mut stdin.lock(), &mut out, config)?;
            Ok(())
        }
        Commands::Settings {
            high_contrast,
            hard_mode,
        } => {
            let update = SettingsUpdate {
                high_contrast: high_contrast.map(bool::from),
                hard_mode: hard_mode.map(bool::from),
            };
            run_settings(&mut session, update, &mut out)
        }
        Commands::Stats => run_stats(session.record(), &mut out),
    }
}
