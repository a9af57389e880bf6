//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized; the next frame picks up the new size.
    Resize,
    /// Terminal lost focus; any held mouse button is treated as released.
    FocusLost,
    Tick,
}

impl AppEvent {
    /// Translate a raw crossterm event; `None` for events the canvas ignores.
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(..) => Some(AppEvent::Resize),
            CtEvent::FocusLost => Some(AppEvent::FocusLost),
            _ => None,
        }
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        // Poll with the tick rate so Tick events keep flowing when idle.
        let app_event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(ev) => match AppEvent::from_crossterm(ev) {
                    Some(e) => e,
                    None => continue,
                },
                Err(err) => {
                    tracing::warn!("terminal read failed: {err}");
                    continue;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(err) => {
                tracing::warn!("terminal poll failed: {err}");
                AppEvent::Tick
            }
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
