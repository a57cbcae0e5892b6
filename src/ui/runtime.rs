use crate::contact::SubmitCapability;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand, UiCommandSender};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use uuid::Uuid;

const COMMAND_QUEUE: usize = 8;
/// Longest sleep between frames while nothing moves on screen.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Decides whether a frame must be drawn.
///
/// A frame is drawn after any change, on every tick while something
/// animates, and once more after the animation settles so the final
/// resting style is on screen.
#[derive(Debug)]
struct FrameGate {
    dirty: bool,
    was_animating: bool,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self {
            dirty: true,
            was_animating: false,
        }
    }
}

impl FrameGate {
    fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn should_draw(&mut self, animating: bool) -> bool {
        let draw = self.dirty || animating || self.was_animating;
        self.dirty = false;
        self.was_animating = animating;
        draw
    }
}

pub fn run(
    mut app: App,
    transport: Arc<dyn SubmitCapability>,
    runtime: Handle,
    shutdown: ShutdownHandle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    app.attach_submitter(spawn_submit_worker(
        &runtime,
        transport,
        events.sender(),
        shutdown.clone(),
    ));
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let start = Instant::now();
    let mut frames = FrameGate::default();
    loop {
        if app.advance(start.elapsed()) {
            frames.invalidate();
        }
        if frames.should_draw(app.is_animating()) {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        let event = events.next(app.idle_wait(tick_rate, IDLE_WAIT));
        // Keys and results apply at the time they are handled.
        if app.advance(start.elapsed()) {
            frames.invalidate();
        }
        match event {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                frames.invalidate();
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                frames.invalidate();
            }
            Ok(AppEvent::SubmitFinished { ticket, outcome }) => {
                app.on_submit_finished(ticket, outcome);
                frames.invalidate();
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Forward submit commands to `transport` on the tokio runtime and report
/// each result back as an [`AppEvent::SubmitFinished`].
pub fn spawn_submit_worker(
    runtime: &Handle,
    transport: Arc<dyn SubmitCapability>,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(async move {
        loop {
            let command = tokio::select! {
                command = rx.recv() => command,
                _ = shutdown.wait() => None,
            };
            let Some(UiCommand::Submit(request)) = command else {
                break;
            };

            let request_id = Uuid::new_v4();
            tracing::info!(
                request_id = %request_id,
                ticket = request.ticket,
                transport = transport.name(),
                "Delivering contact message"
            );
            let outcome = match transport.submit(&request.payload).await {
                Ok(ack) => {
                    tracing::debug!(request_id = %request_id, detail = %ack.detail, "Delivered");
                    Ok(())
                }
                Err(fault) => {
                    tracing::warn!(
                        request_id = %request_id,
                        kind = fault.kind(),
                        error = %fault,
                        "Delivery failed"
                    );
                    Err(fault.to_string())
                }
            };
            let finished = AppEvent::SubmitFinished {
                ticket: request.ticket,
                outcome,
            };
            if events.send(finished).is_err() {
                break;
            }
        }
        tracing::debug!("Submit worker stopped");
    });
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::DryRunTransport;
    use crate::ui::form::{FormPayload, SubmitRequest};

    #[test]
    fn worker_reports_outcome_with_ticket() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let (events_tx, events_rx) = std::sync::mpsc::channel();
        let transport: Arc<dyn SubmitCapability> =
            Arc::new(DryRunTransport::new(Duration::ZERO, true));
        let sender = spawn_submit_worker(
            runtime.handle(),
            transport,
            events_tx,
            ShutdownHandle::new(),
        );

        sender
            .try_send(UiCommand::Submit(SubmitRequest {
                ticket: 7,
                payload: FormPayload::new().with("name", "A"),
            }))
            .unwrap();

        match events_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::SubmitFinished { ticket, outcome }) => {
                assert_eq!(ticket, 7);
                assert_eq!(outcome, Err("Simulated failure".to_string()));
            }
            _ => panic!("expected SubmitFinished"),
        }
    }

    #[test]
    fn frames_stop_once_settled() {
        let mut gate = FrameGate::default();
        assert!(gate.should_draw(false));
        assert!(!gate.should_draw(false));

        assert!(gate.should_draw(true));
        assert!(gate.should_draw(true));
        // One more frame for the settled style, then idle.
        assert!(gate.should_draw(false));
        assert!(!gate.should_draw(false));

        gate.invalidate();
        assert!(gate.should_draw(false));
        assert!(!gate.should_draw(false));
    }

    #[test]
    fn worker_stops_on_shutdown() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let (events_tx, _events_rx) = std::sync::mpsc::channel();
        let shutdown = ShutdownHandle::new();
        let sender = spawn_submit_worker(
            runtime.handle(),
            Arc::new(DryRunTransport::new(Duration::ZERO, false)),
            events_tx,
            shutdown.clone(),
        );

        shutdown.signal();
        runtime.block_on(async {
            tokio::time::timeout(Duration::from_secs(5), sender.closed())
                .await
                .unwrap();
        });
    }
}
