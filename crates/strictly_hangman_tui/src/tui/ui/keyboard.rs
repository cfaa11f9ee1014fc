//! On-screen keyboard.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use strictly_hangman::{Letter, RoundSnapshot};
use strum::IntoEnumIterator;

/// Keys per keyboard row (the last row is shorter).
pub const KEYS_PER_ROW: usize = 9;

/// Style of one key.
///
/// Used keys and every key of a finished round are drawn disabled.
pub fn key_style(snapshot: &RoundSnapshot, letter: Letter, focused: bool) -> Style {
    let base = if snapshot.correct_letters().contains(&letter) {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    } else if snapshot.wrong_letters().contains(&letter) {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if snapshot.status().is_terminal() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

/// Keyboard rows with the cursor highlighted.
pub fn keyboard_lines(snapshot: &RoundSnapshot, cursor: Letter) -> Vec<Line<'static>> {
    let letters: Vec<Letter> = Letter::iter().collect();
    letters
        .chunks(KEYS_PER_ROW)
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .flat_map(|&letter| {
                    [
                        Span::styled(
                            format!(" {} ", letter.as_char()),
                            key_style(snapshot, letter, letter == cursor),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
