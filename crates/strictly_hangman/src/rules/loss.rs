//! Loss detection for hangman.

use super::super::Letter;
use std::collections::BTreeSet;
use tracing::instrument;

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG_GUESSES: usize = 6;

/// Checks if the wrong guesses have used up every attempt.
#[instrument(skip_all)]
pub fn is_hanged(wrong: &BTreeSet<Letter>) -> bool {
    wrong.len() >= MAX_WRONG_GUESSES
}

/// Attempts left before the round is lost. Never negative.
pub fn remaining_attempts(wrong: &BTreeSet<Letter>) -> usize {
    MAX_WRONG_GUESSES.saturating_sub(wrong.len())
}
