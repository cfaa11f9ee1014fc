//! Read-only view of a round for the display layer.

use super::{GameStatus, Letter, Round};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw a round.
///
/// The secret word is only exposed through `slots` while the round is
/// playing. `revealed_word` is filled in once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// One entry per letter of the word; `None` while unguessed.
    slots: Vec<Option<Letter>>,
    /// Correct letters, sorted.
    correct_letters: Vec<Letter>,
    /// Wrong letters, sorted.
    wrong_letters: Vec<Letter>,
    /// Classified letters in guess order.
    history: Vec<Letter>,
    /// Round status.
    status: GameStatus,
    /// Attempts left before the round is lost.
    remaining_attempts: usize,
    /// The full word, once the round is over.
    revealed_word: Option<String>,
}

impl RoundSnapshot {
    pub(crate) fn of(round: &Round) -> Self {
        Self {
            slots: round.masked(),
            correct_letters: round.correct_letters().iter().copied().collect(),
            wrong_letters: round.wrong_letters().iter().copied().collect(),
            history: round.history().to_vec(),
            status: round.status(),
            remaining_attempts: round.remaining_attempts(),
            revealed_word: round
                .status()
                .is_terminal()
                .then(|| round.secret().to_string()),
        }
    }

    /// Number of wrong guesses, which is also the gallows stage.
    pub fn mistakes(&self) -> usize {
        self.wrong_letters.len()
    }

    /// Returns true if the letter was already guessed.
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }

    /// Masked word with `_` for hidden letters, space separated.
    pub fn masked_word(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or('_', Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretWord;

    #[test]
    fn test_snapshot_hides_word_while_playing() {
        let mut round = Round::new(SecretWord::new("PERA").expect("valid word"));
        round.guess(Letter::E);
        round.guess(Letter::Z);
        let snapshot = round.snapshot();

        assert_eq!(snapshot.masked_word(), "_ E _ _");
        assert_eq!(snapshot.revealed_word(), &None);
        assert_eq!(snapshot.wrong_letters(), &vec![Letter::Z]);
        assert_eq!(*snapshot.remaining_attempts(), 5);
        assert_eq!(snapshot.mistakes(), 1);
        assert!(snapshot.is_guessed(Letter::E));
        assert!(!snapshot.is_guessed(Letter::P));
    }

    #[test]
    fn test_snapshot_reveals_word_when_lost() {
        let letters: Vec<_> = "BCDFGH".chars().filter_map(Letter::from_char).collect();
        let round = Round::replay(SecretWord::new("KIWI").expect("valid word"), &letters);
        let snapshot = round.snapshot();

        assert_eq!(snapshot.status(), &GameStatus::Lost);
        assert_eq!(snapshot.revealed_word().as_deref(), Some("KIWI"));
        assert_eq!(snapshot.masked_word(), "_ _ _ _");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut round = Round::new(SecretWord::new("UVA").expect("valid word"));
        round.guess(Letter::U);
        let json = serde_json::to_value(round.snapshot()).expect("serialize");

        assert_eq!(json["status"], "Playing");
        assert_eq!(json["remaining_attempts"], 6);
        assert_eq!(json["slots"], serde_json::json!(["U", null, null]));
    }
}
