//! Strictly Hangman - type-safe hangman game logic
//!
//! A secret word is drawn from a fixed bank, the player guesses letters,
//! and the round ends in a win once every letter is revealed or a loss
//! after six wrong guesses.
//!
//! # Architecture
//!
//! - **Game**: owns the word bank, the RNG, and the active round
//! - **Round**: letter sets, guess history, and the guess transition
//! - **Rules**: pure win/loss evaluation
//! - **Invariants / Contracts**: properties checked after every guess
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{Game, GameStatus, Letter, Round, SecretWord};
//!
//! let word = SecretWord::new("UVA").unwrap();
//! let mut round = Round::new(word);
//! for letter in [Letter::U, Letter::V, Letter::A] {
//!     round.guess(letter);
//! }
//! assert_eq!(round.status(), GameStatus::Won);
//!
//! let mut game = Game::seeded(7);
//! game.guess_letter(Letter::E);
//! assert!(game.remaining_attempts() <= 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod letter;
mod round;
mod snapshot;
mod status;
mod word;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{GuessOutcome, IgnoredGuess};
pub use game::Game;
pub use letter::Letter;
pub use round::Round;
pub use rules::MAX_WRONG_GUESSES;
pub use snapshot::RoundSnapshot;
pub use status::GameStatus;
pub use word::{SecretWord, WordBank, WordError};
