//! Terminal UI.

mod app;
pub mod circle;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
pub mod settings;
mod terminal_guard;
mod theme;

pub use app::App;

use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Draw and handle input until the user quits. Blocks the calling thread.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_ms = tick_rate.as_millis() as u64, "terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("terminal UI stopped");
    Ok(())
}
