//! Win detection for hangman.

use super::super::{Letter, SecretWord};
use std::collections::BTreeSet;
use tracing::instrument;

/// Checks if every distinct letter of the word has been guessed.
#[instrument(skip_all)]
pub fn is_solved(secret: &SecretWord, correct: &BTreeSet<Letter>) -> bool {
    secret.letters().iter().all(|letter| correct.contains(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_solved_with_nothing_guessed() {
        let secret = SecretWord::new("PERA").expect("valid word");
        assert!(!is_solved(&secret, &BTreeSet::new()));
    }

    #[test]
    fn test_repeated_letters_count_once() {
        let secret = SecretWord::new("BANANA").expect("valid word");
        let correct = [Letter::A, Letter::B, Letter::N].into_iter().collect();
        assert!(is_solved(&secret, &correct));
    }

    #[test]
    fn test_missing_one_letter() {
        let secret = SecretWord::new("BANANA").expect("valid word");
        let correct = [Letter::A, Letter::N].into_iter().collect();
        assert!(!is_solved(&secret, &correct));
    }
}
