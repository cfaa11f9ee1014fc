//! Contract-based validation for hangman guesses.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} guess {Q}. A failed precondition is not an error here. It decides
//! which [`IgnoredGuess`] the caller gets back.

use super::action::IgnoredGuess;
use super::invariants::{InvariantViolation, check_round};
use super::{GameStatus, Letter, Round};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a failed precondition turns into.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the round still accepts guesses.
pub struct RoundInPlay;

impl RoundInPlay {
    /// Rejects guesses on a `Won` or `Lost` round.
    #[instrument(skip(round))]
    pub fn check(round: &Round) -> Result<(), IgnoredGuess> {
        match round.status() {
            GameStatus::Playing => Ok(()),
            status => Err(IgnoredGuess::RoundOver(status)),
        }
    }
}

/// Precondition: the letter has not been classified this round.
pub struct LetterIsFresh;

impl LetterIsFresh {
    /// Rejects letters already in either set.
    #[instrument(skip(round))]
    pub fn check(letter: Letter, round: &Round) -> Result<(), IgnoredGuess> {
        if round.is_guessed(letter) {
            Err(IgnoredGuess::AlreadyGuessed(letter))
        } else {
            Ok(())
        }
    }
}

/// Contract for guesses.
///
/// Preconditions:
/// - Round is `Playing`
/// - Letter not guessed yet
///
/// Postconditions:
/// - All round invariants hold
/// - Letter sets only grow
/// - Status only moves forward
pub struct GuessContract;

impl Contract<Round, Letter> for GuessContract {
    type Rejection = IgnoredGuess;

    fn pre(round: &Round, letter: &Letter) -> Result<(), IgnoredGuess> {
        RoundInPlay::check(round)?;
        LetterIsFresh::check(*letter, round)?;
        Ok(())
    }

    fn post(before: &Round, after: &Round) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match check_round(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !before.correct.is_subset(&after.correct) || !before.wrong.is_subset(&after.wrong) {
            violations.push(InvariantViolation::new("Letter sets only grow"));
        }

        if !after.status.can_follow(before.status) {
            violations.push(InvariantViolation::new("Status only moves forward"));
        }

        if before.secret != after.secret {
            violations.push(InvariantViolation::new(
                "Secret word is fixed for the round",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Panics if a guess broke the contract. Debug builds only.
#[cfg(debug_assertions)]
pub(crate) fn assert_contract(before: &Round, after: &Round) {
    if let Err(violations) = GuessContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!(%descriptions, "Guess postcondition failed");
        panic!("Postcondition failed: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretWord;

    fn round(word: &str) -> Round {
        Round::new(SecretWord::new(word).expect("valid word"))
    }

    #[test]
    fn test_precondition_fresh_letter() {
        let round = round("PERA");
        assert!(GuessContract::pre(&round, &Letter::P).is_ok());
    }

    #[test]
    fn test_precondition_repeated_letter() {
        let mut round = round("PERA");
        round.guess(Letter::P);
        assert_eq!(
            GuessContract::pre(&round, &Letter::P),
            Err(IgnoredGuess::AlreadyGuessed(Letter::P))
        );
    }

    #[test]
    fn test_precondition_round_over_checked_first() {
        let mut round = round("UVA");
        for letter in [Letter::U, Letter::V, Letter::A] {
            round.guess(letter);
        }
        assert_eq!(
            GuessContract::pre(&round, &Letter::U),
            Err(IgnoredGuess::RoundOver(GameStatus::Won))
        );
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = round("PERA");
        let mut after = before.clone();
        after.guess(Letter::Z);
        assert!(GuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_shrinking_sets() {
        let mut before = round("PERA");
        before.guess(Letter::P);
        let after = round("PERA");
        assert!(GuessContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_status_reversal() {
        let mut before = round("UVA");
        for letter in [Letter::U, Letter::V, Letter::A] {
            before.guess(letter);
        }
        let mut after = before.clone();
        after.status = GameStatus::Playing;
        let violations = GuessContract::post(&before, &after).expect_err("reversal");
        assert!(
            violations
                .iter()
                .any(|v| v.description == "Status only moves forward")
        );
    }
}
