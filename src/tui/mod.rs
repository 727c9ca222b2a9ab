//! Terminal User Interface for safedeck

pub(crate) mod render;

pub use render::render;

use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::{debug, info, warn};

use crate::app::{App, Event, Handler};

/// Run the TUI until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let events = Handler::new(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, &mut app, events);

    restore_terminal()?;
    terminal.show_cursor()?;

    info!("Terminal restored");
    result
}

/// Run `setup`; if it fails, run `restore` before returning the setup error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|err| {
        warn!(error = %err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            warn!(error = %restore_err, "Failed to restore terminal");
        }
    })
}

/// Leave the alternate screen and raw mode; both are attempted even if one fails
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: Handler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow!("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(restored.get());
        assert_eq!(result.err().as_ref().map(ToString::to_string), Some("no tty".to_string()));
    }

    #[test]
    fn test_setup_error_wins_over_restore_error() {
        let result: Result<()> =
            setup_or_restore(|| Err(anyhow!("no tty")), || Err(anyhow!("restore failed")));
        assert_eq!(result.err().as_ref().map(ToString::to_string), Some("no tty".to_string()));
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() -> Result<()> {
        let restored = Cell::new(false);
        let value = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        )?;

        assert_eq!(value, 7);
        assert!(!restored.get());
        Ok(())
    }
}
