//! Command-line interface for strictly_hangman.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// Strictly Hangman - guess the fruit before the gallows is complete
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Fixed seed for word selection (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run; `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// List the word bank
    Words,

    /// Replay a sequence of guesses on a word and print the result
    Replay {
        /// Secret word (letters A-Z)
        #[arg(short, long)]
        word: String,

        /// Letters to guess, in order
        #[arg(short, long, default_value = "")]
        letters: String,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
