//! Strictly Hangman - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_hangman_tui::{Cli, Command, HangmanConfig, commands, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);

    if command != Command::Play {
        init_stderr_logging();
    }

    let config = HangmanConfig::load(&cli.config)?.with_seed(cli.seed);

    match command {
        Command::Play => run_tui(&config),
        Command::Words => run_words(),
        Command::Replay {
            word,
            letters,
            json,
        } => run_replay(&word, &letters, json),
        Command::Config => run_config(&config),
    }
}

/// Logs to stderr for the non-interactive commands so stdout stays clean.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print the word bank, one word per line
#[instrument]
fn run_words() -> Result<()> {
    let words = commands::list_words();
    info!(count = words.len(), "Listing word bank");
    for word in words {
        println!("{}", word);
    }
    Ok(())
}

/// Replay guesses on a word and print the resulting round
#[instrument]
fn run_replay(word: &str, letters: &str, json: bool) -> Result<()> {
    let snapshot = commands::replay(word, letters)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", commands::describe(&snapshot));
    }
    Ok(())
}

/// Print the effective configuration
#[instrument(skip(config))]
fn run_config(config: &HangmanConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
