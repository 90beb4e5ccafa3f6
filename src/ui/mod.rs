//! Terminal UI: event loop, rendering, and key-to-platform-event routing.

pub mod app;
pub mod events;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

pub use app::Demo;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_ms);
    let mut app = App::new(&config);
    app.start();
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    Ok(())
}
