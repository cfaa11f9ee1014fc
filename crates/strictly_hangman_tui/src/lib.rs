//! Strictly Hangman - terminal front end
//!
//! Command-line parsing, configuration, the non-interactive subcommands,
//! and the ratatui game screen. All game rules live in
//! [`strictly_hangman`]; this crate only draws snapshots and forwards
//! letters and restarts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, HangmanConfig, Timings};
pub use tui::{App, run_tui};
