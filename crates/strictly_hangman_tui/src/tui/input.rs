//! Key mapping and cursor movement over the on-screen keyboard.

use super::ui::keyboard::KEYS_PER_ROW;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_hangman::Letter;
use tracing::instrument;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous key in the row.
    Left,
    /// Next key in the row.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Guess a letter directly.
    Guess(Letter),
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Press the key under the cursor.
    PressFocused,
    /// Start a new round.
    Restart,
    /// Close the result dialog without restarting.
    CloseDialog,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action.
///
/// While the result dialog is open only its own actions (plus restart
/// and quit shortcuts) are available.
#[instrument]
pub fn map_key(key: KeyEvent, dialog_open: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => return Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => return Some(Action::Restart),
        KeyCode::F(5) => return Some(Action::Restart),
        _ => {}
    }

    if dialog_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Restart),
            KeyCode::Esc => Some(Action::CloseDialog),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressFocused),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char(c) if !ctrl => Letter::from_char(c).map(Action::Guess),
        _ => None,
    }
}

/// Moves the cursor over the keyboard grid. Edges do not wrap.
#[instrument]
pub fn move_cursor(cursor: Letter, direction: Direction) -> Letter {
    let index = cursor.index();
    let column = index % KEYS_PER_ROW;

    let target = match direction {
        Direction::Left if column > 0 => Some(index - 1),
        Direction::Right if column + 1 < KEYS_PER_ROW => Some(index + 1),
        Direction::Up => index.checked_sub(KEYS_PER_ROW),
        Direction::Down => Some(index + KEYS_PER_ROW),
        _ => None,
    };

    target.and_then(Letter::from_index).unwrap_or(cursor)
}
