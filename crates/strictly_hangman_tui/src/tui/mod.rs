//! Terminal UI for Strictly Hangman

mod app;
mod input;
mod shake;
pub mod ui;

pub use app::App;
pub use input::{Action, Direction, map_key, move_cursor};
pub use shake::Shake;

use crate::config::HangmanConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use strictly_hangman::Game;
use tracing::{debug, error, info, instrument, warn};

/// Run the hangman TUI until the player quits.
pub fn run_tui(config: &HangmanConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(seed = ?config.seed(), "Starting Strictly Hangman TUI");

    let game = config.seed().map_or_else(Game::new, Game::seeded);
    let mut app = App::new(game, *config.timings());

    enable_raw_mode()?;
    // Restores the terminal on every exit path, panics included
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Strictly Hangman TUI stopped");

    res
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Runs a restore function when dropped.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Draw, wait for input up to one tick, repeat.
#[instrument(skip_all)]
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let tick_rate = app.timings().tick_rate();

    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, app, now))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if *app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() -> io::Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_drop_and_on_panic() {
        {
            let _guard = TerminalGuard::new(count_restore);
        }
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::new(count_restore);
            panic!("game loop failed");
        });
        assert!(result.is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_guard_survives_failed_restore() {
        fn failing_restore() -> io::Result<()> {
            Err(io::Error::other("no terminal"))
        }
        drop(TerminalGuard::new(failing_restore));
    }
}
