//! The hangman state machine.
//!
//! [`Game`] owns the word bank, the random source, and the active
//! [`Round`]. It is the single writer of round state: the display reads
//! snapshots and sends letters and restarts back through these methods.

use super::{GameStatus, GuessOutcome, Letter, Round, RoundSnapshot, WordBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Hangman game session.
#[derive(Debug, Clone)]
pub struct Game {
    bank: WordBank,
    rng: StdRng,
    round: Round,
}

impl Game {
    /// Creates a game seeded from the operating system and starts a round.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a game whose word sequence is fixed by `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a game drawing words with the given random source.
    #[instrument(skip(rng))]
    pub fn with_rng(mut rng: StdRng) -> Self {
        let bank = WordBank::fruits();
        let round = Round::new(bank.choose(&mut rng));
        Self { bank, rng, round }
    }

    /// Continues from an existing round. Later rounds draw from `rng`.
    #[instrument(skip(rng))]
    pub fn resume(round: Round, rng: StdRng) -> Self {
        Self {
            bank: WordBank::fruits(),
            rng,
            round,
        }
    }

    /// Replaces the current round with a fresh one on a newly drawn word.
    ///
    /// The new word may equal the old one by chance.
    #[instrument(skip(self), fields(previous = %self.round.status()))]
    pub fn start_new_game(&mut self) {
        let secret = self.bank.choose(&mut self.rng);
        self.round = Round::new(secret);
        info!(length = self.round.secret().len(), "New round started");
    }

    /// Submits a letter to the current round.
    ///
    /// Never fails; redundant or late guesses come back as
    /// [`GuessOutcome::Ignored`].
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.round.guess(letter);
        debug!(%outcome, status = %self.round.status(), "Guess processed");
        outcome
    }

    /// The active round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The word bank in use.
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Status of the active round.
    pub fn status(&self) -> GameStatus {
        self.round.status()
    }

    /// Attempts left in the active round.
    pub fn remaining_attempts(&self) -> usize {
        self.round.remaining_attempts()
    }

    /// Read-only copy of the active round.
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
