//! Terminal rendering and event loop for kman.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws,
//! and dispatches events (keypress, resize) to the app state.
//!
//! The terminal is held by a [TerminalGuard] for the whole loop. It is released before
//! [run_terminal] returns, on success and on error alike, so a bulk action always runs
//! against a normal terminal.

use crate::app::{AppState, KeypressResult};
use crate::core::BulkAction;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Why the event loop stopped.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Quit,
    /// A bulk action was requested for this snapshot of the selection.
    Bulk(BulkAction, Vec<String>),
}

/// Raw mode + alternate screen, restored when released or dropped.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure still restores raw mode through Drop.
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    fn release(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

/// Puts the terminal back into normal mode. Also used by the panic hook.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until the user quits or requests a bulk action. The terminal is restored before
/// returning.
///
/// Returns an std::io::Error if terminal setup, drawing, event reading or teardown fails.
pub fn run_terminal(app: &mut AppState) -> io::Result<Outcome> {
    let guard = TerminalGuard::acquire()?;
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .and_then(|mut terminal| event_loop(&mut terminal, app, event::read));
    guard.release()?;
    result
}

/// Main event loop of kman: draws the UI, waits for the next event and applies it to the app.
/// Returns when the app asks to stop.
///
/// `next_event` is the only place the loop blocks. Backend errors surface as [io::Error].
pub fn event_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    mut next_event: F,
) -> io::Result<Outcome>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    F: FnMut() -> io::Result<Event>,
{
    let size = terminal.size().map_err(io::Error::other)?;
    app.resize(size.width, size.height);
    draw(terminal, app)?;

    loop {
        match next_event()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_keypress(key) {
                KeypressResult::Quit => return Ok(Outcome::Quit),
                KeypressResult::Bulk(action) => {
                    return Ok(Outcome::Bulk(action, app.engine().snapshot()));
                }
                KeypressResult::Continue => {}
            },

            Event::Resize(width, height) => {
                app.resize(width, height);
            }

            _ => continue,
        }

        draw(terminal, app)?;
    }
}

fn draw<B>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal
        .draw(|f| ui::render(f, app))
        .map(|_| ())
        .map_err(io::Error::other)
}
