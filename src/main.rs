//! Word Drill - CLI
//!
//! Vocabulary drilling game with Wordle-style letter feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_drill::{
    commands::{run_play, score_words, summarize_lengths},
    game::{DEFAULT_MAX_ATTEMPTS, SessionConfig},
    output::{GlyphSet, Typewriter, print_length_summary, print_score_result},
    wordlists::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_drill",
    about = "Vocabulary drill: guess the hidden word, then learn what it means",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a word<TAB>meaning file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds in the console (default)
    Play {
        /// Only use words with this many letters (skips the length menu)
        #[arg(short, long)]
        length: Option<usize>,

        /// Attempts per round
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_MAX_ATTEMPTS as u8,
            value_parser = clap::value_parser!(u8).range(1..)
        )]
        attempts: u8,

        /// Feedback glyphs: marks (✓○×) or tiles (🟩🟨⬜)
        #[arg(short, long, default_value = "marks")]
        glyphs: GlyphSet,

        /// Reveal feedback one character at a time, pausing this many milliseconds
        #[arg(short, long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Score a single guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,

        /// Feedback glyphs: marks (✓○×) or tiles (🟩🟨⬜)
        #[arg(short, long, default_value = "marks")]
        glyphs: GlyphSet,
    },

    /// Show how many words of each length the word list has
    Lengths,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load the word bank based on the -w flag
fn load_word_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "builtin" => Ok(WordBank::builtin()),
        path => load_from_file(path).with_context(|| format!("Could not load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        attempts: DEFAULT_MAX_ATTEMPTS as u8,
        glyphs: GlyphSet::default(),
        delay_ms: 0,
    });

    match command {
        Commands::Play {
            length,
            attempts,
            glyphs,
            delay_ms,
        } => {
            let bank = load_word_bank(&cli.wordlist)?;

            let config = SessionConfig {
                max_attempts: usize::from(attempts),
                glyphs,
                typewriter: Typewriter::new(Duration::from_millis(delay_ms)),
                word_length: length,
            };
            run_play(&bank, config)
        }
        Commands::Score {
            guess,
            target,
            glyphs,
        } => {
            let result = score_words(&guess, &target)?;
            print_score_result(&result, glyphs);
            Ok(())
        }
        Commands::Lengths => {
            let bank = load_word_bank(&cli.wordlist)?;
            print_length_summary(&summarize_lengths(&bank));
            Ok(())
        }
    }
}
