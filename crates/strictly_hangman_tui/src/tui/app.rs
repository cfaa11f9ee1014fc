//! Application state and logic.

use super::input::{Action, map_key, move_cursor};
use super::shake::Shake;
use crate::config::Timings;
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use std::time::Instant;
use strictly_hangman::{Game, GameStatus, GuessOutcome, Letter};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the game plus everything that is purely presentational: the
/// keyboard cursor, the shake cue, and when the result dialog may show.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Letter,
    #[getter(skip)]
    shake: Option<Shake>,
    round_over_at: Option<Instant>,
    dialog_dismissed: bool,
    status_message: String,
    timings: Timings,
    should_quit: bool,
}

impl App {
    /// Creates the app around a game.
    #[instrument(skip(game))]
    pub fn new(game: Game, timings: Timings) -> Self {
        Self {
            game,
            cursor: Letter::A,
            shake: None,
            round_over_at: None,
            dialog_dismissed: false,
            status_message: "Type a letter or pick one on the keyboard.".to_string(),
            timings,
            should_quit: false,
        }
    }

    /// Handles a key press at `now`.
    ///
    /// Dialog keys apply as soon as the round is over, before the
    /// dialog is drawn.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(action) = map_key(key, self.dialog_pending()) {
            self.apply(action, now);
        }
    }

    /// Applies an action at `now`.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action, now: Instant) {
        debug!(?action, "Applying action");
        match action {
            Action::Guess(letter) => self.guess(letter, now),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::PressFocused => self.guess(self.cursor, now),
            Action::Restart => self.restart(),
            Action::CloseDialog => self.dialog_dismissed = true,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Guesses a letter, starting the shake on a miss.
    #[instrument(skip(self))]
    pub fn guess(&mut self, letter: Letter, now: Instant) {
        let outcome = self.game.guess_letter(letter);

        match outcome {
            GuessOutcome::Correct(_) => {}
            GuessOutcome::Wrong(_) => {
                self.shake = Some(Shake::start(now, self.timings.shake_duration()));
            }
            // Used keys are drawn disabled; pressing one again does nothing.
            GuessOutcome::Ignored(_) => return,
        }

        self.status_message = match self.game.status() {
            GameStatus::Playing => outcome.to_string(),
            GameStatus::Won => "You won!".to_string(),
            GameStatus::Lost => "You lost!".to_string(),
        };

        if self.game.status().is_terminal() && self.round_over_at.is_none() {
            self.round_over_at = Some(now);
        }
    }

    /// Starts a new round and resets the presentation state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.start_new_game();
        self.shake = None;
        self.round_over_at = None;
        self.dialog_dismissed = false;
        self.status_message = "New word. Good luck!".to_string();
    }

    /// Drops finished animations.
    pub fn tick(&mut self, now: Instant) {
        if self.shake.is_some_and(|shake| shake.is_finished(now)) {
            self.shake = None;
        }
    }

    /// Returns true once the round is over until the dialog is dismissed.
    pub fn dialog_pending(&self) -> bool {
        self.round_over_at.is_some() && !self.dialog_dismissed
    }

    /// Returns true if the result dialog should be drawn at `now`.
    pub fn dialog_visible(&self, now: Instant) -> bool {
        match self.round_over_at {
            Some(at) => {
                self.dialog_pending()
                    && now.saturating_duration_since(at) >= self.timings.dialog_delay()
            }
            None => false,
        }
    }

    /// Current horizontal offset of the gallows.
    pub fn shake_offset(&self, now: Instant) -> f64 {
        self.shake.map_or(0.0, |shake| shake.offset_at(now))
    }

    /// Returns true while a shake is running.
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake.is_some_and(|shake| !shake.is_finished(now))
    }
}
