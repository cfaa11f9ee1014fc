//! Bounded mistakes invariant.

use super::super::Round;
use super::super::rules::MAX_WRONG_GUESSES;
use super::Invariant;

/// Invariant: at most six wrong letters, and every one of them is
/// absent from the word.
pub struct BoundedMistakesInvariant;

impl Invariant<Round> for BoundedMistakesInvariant {
    fn holds(round: &Round) -> bool {
        round.wrong.len() <= MAX_WRONG_GUESSES
            && round.wrong.iter().all(|letter| !round.secret.contains(*letter))
    }

    fn description() -> &'static str {
        "At most six wrong letters, none of them in the word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, SecretWord};

    #[test]
    fn test_holds_when_guessing_past_the_limit() {
        let mut round = Round::new(SecretWord::new("KIWI").expect("valid word"));
        for c in "BCDFGHJLMN".chars() {
            if let Some(letter) = Letter::from_char(c) {
                round.guess(letter);
            }
        }
        assert_eq!(round.wrong_letters().len(), MAX_WRONG_GUESSES);
        assert!(BoundedMistakesInvariant::holds(&round));
    }

    #[test]
    fn test_seventh_wrong_letter_violates() {
        let mut round = Round::new(SecretWord::new("KIWI").expect("valid word"));
        round.wrong.extend((0..7).filter_map(|i| Letter::from_index(i + 11)));
        assert!(!BoundedMistakesInvariant::holds(&round));
    }

    #[test]
    fn test_misclassified_letter_violates() {
        let mut round = Round::new(SecretWord::new("KIWI").expect("valid word"));
        round.wrong.insert(Letter::K);
        assert!(!BoundedMistakesInvariant::holds(&round));
    }
}
