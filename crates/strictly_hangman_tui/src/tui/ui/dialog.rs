//! End-of-round dialog.

use super::center_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_hangman::{GameStatus, RoundSnapshot};

const WIDTH: u16 = 36;
const HEIGHT: u16 = 9;

/// Draws the result dialog over `area`. Does nothing while playing.
pub fn render_dialog(frame: &mut Frame, area: Rect, snapshot: &RoundSnapshot) {
    let Some(word) = snapshot.revealed_word() else {
        return;
    };

    let (title, color) = match snapshot.status() {
        GameStatus::Won => ("You won!", Color::Green),
        _ => ("You lost!", Color::LightRed),
    };

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The word was:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            word.clone(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Play again   [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = center_rect(area, WIDTH, HEIGHT);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Round over")),
        popup,
    );
}
