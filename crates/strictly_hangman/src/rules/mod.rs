//! Game rules for hangman.
//!
//! Pure functions over the secret word and the two letter sets. Rules are
//! kept apart from round storage so the invariants and contracts can
//! reuse them.

pub mod loss;
pub mod win;

pub use loss::{MAX_WRONG_GUESSES, is_hanged, remaining_attempts};
pub use win::is_solved;

use super::{GameStatus, Letter, SecretWord};
use std::collections::BTreeSet;
use tracing::instrument;

/// Computes the status implied by the letter sets.
///
/// Loss and win are checked independently. A single guess adds to only one
/// set, so both can never become true on the same guess.
#[instrument(skip_all)]
pub fn evaluate(
    secret: &SecretWord,
    correct: &BTreeSet<Letter>,
    wrong: &BTreeSet<Letter>,
) -> GameStatus {
    if is_hanged(wrong) {
        GameStatus::Lost
    } else if is_solved(secret, correct) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> BTreeSet<Letter> {
        letters.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn test_fresh_round_is_playing() {
        let secret = SecretWord::new("UVA").expect("valid word");
        assert_eq!(evaluate(&secret, &set(""), &set("")), GameStatus::Playing);
    }

    #[test]
    fn test_full_coverage_wins() {
        let secret = SecretWord::new("UVA").expect("valid word");
        assert_eq!(evaluate(&secret, &set("AUV"), &set("XY")), GameStatus::Won);
    }

    #[test]
    fn test_six_wrong_loses() {
        let secret = SecretWord::new("KIWI").expect("valid word");
        assert_eq!(
            evaluate(&secret, &set("K"), &set("BCDFGH")),
            GameStatus::Lost
        );
    }
}
