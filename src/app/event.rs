//! Terminal event polling

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as TerminalEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Events the run loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing arrived within the poll interval
    Tick,
    /// A key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl Event {
    /// Map a raw terminal event; key releases and repeats collapse to `Tick`
    #[must_use]
    pub const fn from_terminal(event: &TerminalEvent) -> Self {
        match event {
            TerminalEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => Self::Key(*key),
            TerminalEvent::Resize(w, h) => Self::Resize(*w, *h),
            _ => Self::Tick,
        }
    }
}

/// Polls the terminal with a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Create a handler polling every `poll_interval_ms` milliseconds
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.poll_interval)? {
            Ok(Event::from_terminal(&event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    /// The poll interval
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}
