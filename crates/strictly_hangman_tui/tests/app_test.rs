//! Tests for the TUI application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use strictly_hangman::{Game, GameStatus, Letter, Round, SecretWord};
use strictly_hangman_tui::{App, Timings};

fn app(word: &str) -> App {
    let round = Round::new(SecretWord::new(word).expect("valid word"));
    App::new(
        Game::resume(round, StdRng::seed_from_u64(11)),
        Timings::default(),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_typed_letter_is_guessed() {
    let mut app = app("UVA");
    let now = Instant::now();

    app.handle_key(key(KeyCode::Char('u')), now);

    assert!(app.game().round().correct_letters().contains(&Letter::U));
    assert!(!app.is_shaking(now));
}

#[test]
fn test_wrong_guess_shakes_for_configured_duration() {
    let mut app = app("UVA");
    let now = Instant::now();

    app.handle_key(key(KeyCode::Char('z')), now);

    assert_eq!(app.game().remaining_attempts(), 5);
    assert!(app.is_shaking(now + ms(100)));
    assert_ne!(app.shake_offset(now + ms(50)), 0.0);
    assert!(!app.is_shaking(now + ms(400)));

    app.tick(now + ms(450));
    assert_eq!(app.shake_offset(now + ms(450)), 0.0);
}

#[test]
fn test_repeated_key_changes_nothing() {
    let mut app = app("UVA");
    let now = Instant::now();

    app.handle_key(key(KeyCode::Char('z')), now);
    app.tick(now + ms(500));
    let message = app.status_message().clone();

    app.handle_key(key(KeyCode::Char('Z')), now + ms(600));

    assert_eq!(app.game().remaining_attempts(), 5);
    assert!(!app.is_shaking(now + ms(650)));
    assert_eq!(app.status_message(), &message);
}

#[test]
fn test_cursor_picks_focused_key() {
    let mut app = app("BANANA");
    let now = Instant::now();

    app.handle_key(key(KeyCode::Right), now);
    assert_eq!(*app.cursor(), Letter::B);
    app.handle_key(key(KeyCode::Enter), now);

    assert!(app.game().round().correct_letters().contains(&Letter::B));
}

#[test]
fn test_dialog_waits_for_delay() {
    let mut app = app("UVA");
    let now = Instant::now();

    for c in ['u', 'v', 'a'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }

    assert_eq!(app.game().status(), GameStatus::Won);
    assert_eq!(app.status_message(), "You won!");
    assert!(!app.dialog_visible(now));
    assert!(!app.dialog_visible(now + ms(499)));
    assert!(app.dialog_visible(now + ms(500)));
}

#[test]
fn test_lost_round_opens_dialog() {
    let mut app = app("UVA");
    let now = Instant::now();

    for c in ['b', 'c', 'd', 'e', 'f', 'g'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }

    assert_eq!(app.game().status(), GameStatus::Lost);
    assert!(app.dialog_visible(now + ms(500)));
}

#[test]
fn test_escape_closes_dialog_without_restart() {
    let mut app = app("UVA");
    let now = Instant::now();
    for c in ['u', 'v', 'a'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    let later = now + ms(600);

    app.handle_key(key(KeyCode::Esc), later);

    assert!(!app.dialog_visible(later));
    assert!(!*app.should_quit());
    assert_eq!(app.game().status(), GameStatus::Won);
}

#[test]
fn test_escape_before_dialog_shows_does_not_quit() {
    let mut app = app("UVA");
    let now = Instant::now();
    for c in ['u', 'v', 'a'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    assert!(app.dialog_pending());

    app.handle_key(key(KeyCode::Esc), now + ms(100));

    assert!(!*app.should_quit());
    assert!(!app.dialog_pending());
    assert!(!app.dialog_visible(now + ms(600)));
    assert_eq!(app.game().status(), GameStatus::Won);

    app.handle_key(key(KeyCode::Esc), now + ms(700));
    assert!(*app.should_quit());
}

#[test]
fn test_enter_on_dialog_starts_new_round() {
    let mut app = app("UVA");
    let now = Instant::now();
    for c in ['u', 'v', 'a'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    let later = now + ms(600);

    app.handle_key(key(KeyCode::Enter), later);

    assert_eq!(app.game().status(), GameStatus::Playing);
    assert!(app.game().round().history().is_empty());
    assert!(!app.dialog_visible(later + ms(1000)));
}

#[test]
fn test_restart_is_available_mid_round() {
    let mut app = app("UVA");
    let now = Instant::now();
    app.handle_key(key(KeyCode::Char('z')), now);

    app.handle_key(key(KeyCode::F(5)), now);

    assert_eq!(app.game().remaining_attempts(), 6);
    assert!(!app.is_shaking(now));
}

#[test]
fn test_escape_quits_while_playing() {
    let mut app = app("UVA");
    app.handle_key(key(KeyCode::Esc), Instant::now());
    assert!(*app.should_quit());
}

#[test]
fn test_ctrl_c_quits_with_dialog_open() {
    let mut app = app("UVA");
    let now = Instant::now();
    for c in ['u', 'v', 'a'] {
        app.handle_key(key(KeyCode::Char(c)), now);
    }

    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        now + ms(600),
    );

    assert!(*app.should_quit());
}
