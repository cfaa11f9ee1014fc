//! Round state and the guess transition.

use super::action::{GuessOutcome, IgnoredGuess};
use super::contracts::{Contract, GuessContract};
use super::{GameStatus, Letter, RoundSnapshot, SecretWord, rules};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// One playthrough on a single secret word.
///
/// The only way to change a round is [`Round::guess`]. Status is derived
/// from the letter sets and recomputed after every call, so it cannot be
/// set from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) secret: SecretWord,
    pub(crate) correct: BTreeSet<Letter>,
    pub(crate) wrong: BTreeSet<Letter>,
    pub(crate) history: Vec<Letter>,
    pub(crate) status: GameStatus,
}

impl Round {
    /// Starts a round on the given word with nothing guessed.
    #[instrument]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            correct: BTreeSet::new(),
            wrong: BTreeSet::new(),
            history: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Submits a letter.
    ///
    /// The guess only takes effect while the round is `Playing` and the
    /// letter has not been classified yet. Otherwise the round is left
    /// unchanged and the outcome says why.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if let Err(reason) = GuessContract::pre(self, &letter) {
            debug!(%reason, "Guess ignored");
            self.refresh_status();
            return GuessOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = if self.secret.contains(letter) {
            self.correct.insert(letter);
            GuessOutcome::Correct(letter)
        } else {
            self.wrong.insert(letter);
            GuessOutcome::Wrong(letter)
        };
        self.history.push(letter);
        self.refresh_status();

        #[cfg(debug_assertions)]
        super::contracts::assert_contract(&before, self);

        debug!(
            ?outcome,
            correct = self.correct.len(),
            wrong = self.wrong.len(),
            "Guess applied"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, guesses = self.history.len(), "Round finished");
        }

        outcome
    }

    /// Rebuilds a round by guessing each letter in order.
    #[instrument(skip(letters), fields(count = letters.len()))]
    pub fn replay(secret: SecretWord, letters: &[Letter]) -> Self {
        let mut round = Self::new(secret);
        for letter in letters {
            round.guess(*letter);
        }
        round
    }

    fn refresh_status(&mut self) {
        self.status = rules::evaluate(&self.secret, &self.correct, &self.wrong);
    }

    /// The secret word.
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Guessed letters that occur in the word.
    pub fn correct_letters(&self) -> &BTreeSet<Letter> {
        &self.correct
    }

    /// Guessed letters that do not occur in the word.
    pub fn wrong_letters(&self) -> &BTreeSet<Letter> {
        &self.wrong
    }

    /// Classified letters in the order they were guessed.
    pub fn history(&self) -> &[Letter] {
        &self.history
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `6 - |wrong letters|`, never negative.
    pub fn remaining_attempts(&self) -> usize {
        rules::remaining_attempts(&self.wrong)
    }

    /// Number of wrong guesses so far.
    pub fn mistakes(&self) -> usize {
        self.wrong.len()
    }

    /// Returns true if the letter was already guessed this round.
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    /// The word with unguessed positions hidden.
    pub fn masked(&self) -> Vec<Option<Letter>> {
        self.secret
            .letters()
            .iter()
            .map(|letter| self.correct.contains(letter).then_some(*letter))
            .collect()
    }

    /// Read-only copy of the state for display.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::of(self)
    }

    /// Reason a guess of `letter` would be ignored right now, if any.
    pub fn ignored_reason(&self, letter: Letter) -> Option<IgnoredGuess> {
        GuessContract::pre(self, &letter).err()
    }
}
