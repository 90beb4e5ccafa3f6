//! Input pump: a background thread translating terminal input and a tick
//! timer into channel events for the main loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tracing::warn;

/// Events delivered to the main loop.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || pump(tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn pump(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        // Short poll timeout so ticks stay on schedule between key events.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        return;
                    }
                }
                Ok(Event::Resize(cols, rows)) => {
                    if tx.send(AppEvent::Resize(cols, rows)).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "input read failed");
                    return;
                }
            },
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "input poll failed");
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
