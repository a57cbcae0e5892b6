use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

/// Upper bound on one blocking poll, so a shutdown is noticed promptly.
const MAX_POLL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The submit worker finished a request. `Err` holds the fault text.
    SubmitFinished {
        ticket: u64,
        outcome: Result<(), String>,
    },
    /// SIGINT or SIGTERM arrived.
    Shutdown,
}

/// Merges terminal input, redraw ticks and worker results into one queue
/// consumed by the UI loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || poll_input(input_tx, tick_rate, shutdown));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for producers outside the input thread.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn poll_input(tx: Sender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    while !shutdown.is_shutting_down() {
        let wait = tick_rate.saturating_sub(last_tick.elapsed()).min(MAX_POLL);
        let forwarded = match event::poll(wait) {
            Ok(true) => match event::read() {
                Ok(event) => forward(&tx, event),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    return;
                }
            },
            Ok(false) => true,
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                return;
            }
        };
        if !forwarded {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
    let _ = tx.send(AppEvent::Shutdown);
}

/// Returns `false` once the UI side has hung up.
fn forward(tx: &Sender<AppEvent>, event: Event) -> bool {
    let app_event = match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
        Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
        _ => return true,
    };
    tx.send(app_event).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn releases_are_dropped() {
        let (tx, rx) = mpsc::channel();
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(forward(&tx, Event::Key(release)));
        assert!(forward(&tx, Event::Resize(80, 24)));
        assert!(forward(&tx, Event::FocusGained));

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Resize(80, 24))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn hang_up_stops_forwarding() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!forward(&tx, Event::Key(key)));
    }
}
