use crate::tui::components::dialogs::DismissTrigger;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tracing::warn;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Bracketed paste
    Paste(String),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// Status message event
    StatusMessage(String),

    /// Clear status message event
    ClearStatus,

    /// The detail dialog left the open state
    DialogClosed(DismissTrigger),

    /// Hand a URL to the system browser
    OpenUrl(String),
}

/// Event handler for terminal input
pub struct EventHandler {
    /// Tick interval for periodic events
    tick_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    /// Wait up to one tick for terminal input; yields `Event::Tick` when none arrives
    pub async fn next(&mut self) -> Event {
        let tick = self.tick_interval;
        let polled = tokio::task::spawn_blocking(move || -> std::io::Result<Option<CrosstermEvent>> {
            if crossterm::event::poll(tick)? {
                crossterm::event::read().map(Some)
            } else {
                Ok(None)
            }
        })
        .await;

        match polled {
            Ok(Ok(Some(event))) => Self::convert_crossterm_event(event).unwrap_or(Event::Tick),
            Ok(Ok(None)) => Event::Tick,
            Ok(Err(e)) => {
                warn!("Failed to read terminal event: {}", e);
                Event::Tick
            }
            Err(e) => {
                warn!("Terminal event task failed: {}", e);
                Event::Tick
            }
        }
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
            CrosstermEvent::Mouse(mouse_event) => Some(Event::Mouse(mouse_event)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
