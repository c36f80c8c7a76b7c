use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use super::app::App;

type Backend = CrosstermBackend<Stdout>;

/// Take over the terminal, run the draw loop until the user quits, and hand
/// the terminal back. Every setup step that succeeded is undone even when a
/// later step or the loop fails, and the first failure is the one returned.
pub fn run_app(app: &mut App, tick_rate: Duration) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let session = alternate_screen_session(app, tick_rate);
    let restored = disable_raw_mode().context("failed to disable raw mode");
    info!(rows = app.rows().len(), "session ended");
    first_failure(session, restored)
}

/// Everything that happens on the alternate screen: build the backend, loop,
/// then leave the screen again.
fn alternate_screen_session(app: &mut App, tick_rate: Duration) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;

    let session = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to create terminal backend")
        .and_then(|mut terminal| {
            let looped = event_loop(&mut terminal, app, tick_rate);
            let cursor = terminal
                .show_cursor()
                .context("failed to restore cursor visibility");
            first_failure(looped, cursor)
        });

    let left = execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    first_failure(session, left)
}

fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, tick_rate: Duration) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(tick_rate).context("event polling failed")? {
            continue;
        }

        if let Event::Key(key_event) = event::read().context("failed to read event")? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let exit = if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                app.handle_ctrl_key(key_event.code)
            } else {
                app.handle_key(key_event.code)
            };

            if exit {
                return Ok(());
            }
        }
    }
}

/// Combine the outcome of a step with the outcome of its cleanup. A failed
/// step wins; a cleanup error behind it is logged instead of dropped.
fn first_failure(step: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (step, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            warn!(error = %format!("{cleanup_err:#}"), "terminal cleanup also failed");
            Err(err)
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}
