//! Guess outcomes.
//!
//! A guess never fails. Redundant guesses and guesses on a finished
//! round are reported as [`GuessOutcome::Ignored`] and leave the round
//! untouched.

use super::{GameStatus, Letter};
use serde::{Deserialize, Serialize};

/// Why a guess had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredGuess {
    /// The letter was already classified this round.
    #[display("{} was already guessed", _0)]
    AlreadyGuessed(Letter),

    /// The round is over.
    #[display("Round is over ({})", _0)]
    RoundOver(GameStatus),
}

/// Result of submitting a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter occurs in the secret word.
    Correct(Letter),
    /// The letter does not occur in the secret word.
    Wrong(Letter),
    /// Nothing changed.
    Ignored(IgnoredGuess),
}

impl GuessOutcome {
    /// Returns true if the guess changed the round.
    pub fn changed_state(&self) -> bool {
        !matches!(self, GuessOutcome::Ignored(_))
    }

    /// Returns true for a wrong guess (the one that triggers the shake cue).
    pub fn is_wrong(&self) -> bool {
        matches!(self, GuessOutcome::Wrong(_))
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::Correct(letter) => write!(f, "{} is in the word", letter),
            GuessOutcome::Wrong(letter) => write!(f, "{} is not in the word", letter),
            GuessOutcome::Ignored(reason) => write!(f, "{}", reason),
        }
    }
}
