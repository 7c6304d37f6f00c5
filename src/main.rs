//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_words, find_solutions, run_simple, run_survey},
    config::GameConfig,
    game::Game,
    output::{print_check_result, print_solutions_result, print_survey_statistics},
    validator::{Validator, WordSet},
    wordlists::loader::{load_dictionary, load_start_words},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rules: strict (default, 3+ letters and not the root word) or classic
    #[arg(
        short,
        long,
        global = true,
        default_value = "strict",
        value_parser = ["classic", "strict"]
    )]
    variant: String,

    /// Empty submissions: ignore (default) or validate
    #[arg(long, global = true, default_value = "ignore", value_parser = ["ignore", "validate"])]
    empty_input: String,

    /// Input text after a rejected word: keep (default) or clear
    #[arg(long, global = true, default_value = "keep", value_parser = ["keep", "clear"])]
    on_reject: String,

    /// Root word list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary file (default: embedded list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log filter, e.g. 'debug' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a root word as one round
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List every playable word for a root word
    Solutions {
        /// The root word
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank root words by achievable score
    Survey {
        /// Limit number of root words surveyed
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of top roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn init_logging(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = GameConfig::from_names(&cli.variant, &cli.empty_input, &cli.on_reject)
        .with_paths(cli.words, cli.dictionary);
    tracing::debug!(?config, "configuration resolved");

    let dictionary = load_dictionary(config.dictionary_path.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, dictionary),
        Commands::Simple => run_simple_command(&config, dictionary),
        Commands::Check { root, words } => {
            run_check_command(&config, dictionary, &root, &words);
            Ok(())
        }
        Commands::Solutions { root, limit } => {
            run_solutions_command(&config, &dictionary, &root, limit);
            Ok(())
        }
        Commands::Survey { limit, top } => {
            run_survey_command(&config, &dictionary, limit, top);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig, dictionary: WordSet) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let start_words = load_start_words(config.words_path.as_deref());
    let game = Game::new(config.rules.clone(), dictionary);
    let app = App::new(game, start_words, config.on_reject);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, dictionary: WordSet) -> Result<()> {
    let start_words = load_start_words(config.words_path.as_deref());
    let mut game = Game::new(config.rules.clone(), dictionary);
    run_simple(&mut game, &start_words)
}

fn run_check_command(config: &GameConfig, dictionary: WordSet, root: &str, words: &[String]) {
    let mut game = Game::new(config.rules.clone(), dictionary);
    let result = check_words(&mut game, root, words);
    print_check_result(&result);
}

fn run_solutions_command(
    config: &GameConfig,
    dictionary: &WordSet,
    root: &str,
    limit: Option<usize>,
) {
    let validator = Validator::new(config.rules.clone(), dictionary);
    let result = find_solutions(&validator, dictionary, root);
    print_solutions_result(&result, limit);
}

fn run_survey_command(
    config: &GameConfig,
    dictionary: &WordSet,
    limit: Option<usize>,
    top: usize,
) {
    let roots = load_start_words(config.words_path.as_deref());
    let count = limit.map_or(roots.len(), |l| l.min(roots.len()));
    println!("Surveying {count} root words...");

    let validator = Validator::new(config.rules.clone(), dictionary);
    let stats = run_survey(&validator, dictionary, &roots, limit);
    print_survey_statistics(&stats, top);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_strict_ignore_keep() {
        let cli = Cli::try_parse_from(["word_scramble"]).unwrap();
        assert_eq!(cli.variant, "strict");
        assert_eq!(cli.empty_input, "ignore");
        assert_eq!(cli.on_reject, "keep");
        assert!(cli.command.is_none());
    }

    #[test]
    fn accepts_known_policy_names() {
        let cli = Cli::try_parse_from([
            "word_scramble",
            "simple",
            "--variant",
            "classic",
            "--empty-input",
            "validate",
            "--on-reject",
            "clear",
        ])
        .unwrap();
        assert_eq!(cli.variant, "classic");
        assert_eq!(cli.empty_input, "validate");
        assert_eq!(cli.on_reject, "clear");
    }

    #[test]
    fn rejects_misspelled_policy_names() {
        for args in [
            ["word_scramble", "--variant", "clasic"],
            ["word_scramble", "--empty-input", "validat"],
            ["word_scramble", "--on-reject", "clean"],
        ] {
            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        }
    }
}
