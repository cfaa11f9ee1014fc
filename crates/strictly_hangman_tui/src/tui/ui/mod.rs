//! Stateless UI rendering for hangman.

pub mod dialog;
pub mod gallows;
pub mod keyboard;
pub mod word;

use super::app::App;
use gallows::Gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use strictly_hangman::GameStatus;

/// Renders the whole screen at `now`.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let snapshot = app.game().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(16), // Gallows
            Constraint::Length(1), // Attempts
            Constraint::Length(2), // Word
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Games - Hangman")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let gallows_area = center_rect(chunks[1], 32, chunks[1].height);
    frame.render_widget(
        Gallows::new(snapshot.mistakes()).offset(app.shake_offset(now)),
        gallows_area,
    );

    let attempts = Paragraph::new(format!(
        "{} attempts remaining",
        snapshot.remaining_attempts()
    ))
    .style(attempts_style(*snapshot.remaining_attempts()))
    .alignment(Alignment::Center);
    frame.render_widget(attempts, chunks[2]);

    frame.render_widget(
        Paragraph::new(word::word_line(&snapshot)).alignment(Alignment::Center),
        chunks[3],
    );

    let keyboard = Paragraph::new(keyboard::keyboard_lines(&snapshot, *app.cursor()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keyboard"));
    frame.render_widget(keyboard, center_rect(chunks[4], 42, 5));

    let status_color = match snapshot.status() {
        GameStatus::Playing => Color::Yellow,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::LightRed,
    };
    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[5]);

    let help = Paragraph::new(Line::from(
        "A-Z guess | Arrows+Enter pick | F5/Ctrl+R new word | Esc quit",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);

    if app.dialog_visible(now) {
        dialog::render_dialog(frame, area, &snapshot);
    }
}

fn attempts_style(remaining: usize) -> Style {
    match remaining {
        0..=1 => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        2..=3 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Gray),
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = center_rect(area, 40, 10);
        assert_eq!(centered, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_attempts_style_follows_snapshot() {
        use strictly_hangman::{Letter, Round, SecretWord};

        let mut round = Round::new(SecretWord::new("UVA").expect("valid word"));
        assert_eq!(
            attempts_style(*round.snapshot().remaining_attempts()).fg,
            Some(Color::Gray)
        );
        for letter in [Letter::B, Letter::C, Letter::D, Letter::E, Letter::F] {
            round.guess(letter);
        }
        let style = attempts_style(*round.snapshot().remaining_attempts());
        assert_eq!(style.fg, Some(Color::LightRed));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let centered = center_rect(area, 40, 10);
        assert!(centered.width <= area.width);
        assert!(centered.height <= area.height);
    }
}
