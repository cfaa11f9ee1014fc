//! Round status.

use serde::{Deserialize, Serialize};

/// Outcome of a round so far.
///
/// `Playing` is the only non-terminal status. A round moves to `Won` or
/// `Lost` at most once and never leaves it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Guesses are still accepted.
    #[default]
    #[display("Playing")]
    Playing,
    /// Every distinct letter of the word has been guessed.
    #[display("Won")]
    Won,
    /// Six wrong guesses were made.
    #[display("Lost")]
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Returns true if a round may move from `previous` to `self`.
    pub(crate) fn can_follow(self, previous: GameStatus) -> bool {
        previous == self || previous == GameStatus::Playing
    }
}
