//! Owner of the submission state: runs the reducer and its side effects.

use std::time::Duration;

use crate::config::FormConfig;
use crate::motion::{CancelHandle, TimerFacility};
use crate::ui::mvi::Reducer;

use super::fields::{FieldError, FormFields, FormPayload};
use super::intent::SubmissionIntent;
use super::reducer::SubmissionReducer;
use super::state::SubmissionState;

/// Timer payload returning the form to `idle`.
///
/// Carries the ticket of the submission that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetForm {
    pub ticket: u64,
}

/// Work the caller must hand to the submit capability.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub ticket: u64,
    pub payload: FormPayload,
}

#[derive(Debug, Clone)]
pub enum FormEvent {
    /// User pressed send.
    Submit,
    /// The submit capability finished. `Err` holds the fault description.
    Completed {
        ticket: u64,
        outcome: Result<(), String>,
    },
    /// The reset timer fired.
    ResetElapsed {
        handle: CancelHandle,
        reset: ResetForm,
    },
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Now loading; the request must be sent.
    Started(SubmitRequest),
    /// A required field is empty; state untouched.
    Blocked(FieldError),
    /// A submission is already in flight.
    Busy,
    /// State transitioned.
    Applied,
    /// Stale completion or reset.
    Ignored,
}

/// Messages shown for each phase.
#[derive(Debug, Clone, PartialEq)]
pub struct FormMessages {
    pub pending: String,
    pub success: String,
    pub failure: String,
}

pub struct FormController {
    state: SubmissionState,
    fields: FormFields,
    messages: FormMessages,
    reset_delay: Duration,
    /// Identity of the latest submission cycle.
    ticket: u64,
    in_flight: Option<u64>,
    reset: Option<CancelHandle>,
}

impl FormController {
    pub fn new(fields: FormFields, config: &FormConfig) -> Self {
        Self {
            state: SubmissionState::default(),
            fields,
            messages: FormMessages {
                pending: config.pending_message.clone(),
                success: config.success_message.clone(),
                failure: config.failure_message.clone(),
            },
            reset_delay: Duration::from_millis(config.reset_ms),
            ticket: 0,
            in_flight: None,
            reset: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Editable fields, or `None` while a submission is in flight.
    pub fn fields_mut(&mut self) -> Option<&mut FormFields> {
        if self.state.is_busy() {
            None
        } else {
            Some(&mut self.fields)
        }
    }

    /// Handle of the armed reset timer, if any.
    pub fn pending_reset(&self) -> Option<CancelHandle> {
        self.reset
    }

    /// Single entry point for every form event.
    pub fn dispatch<T, F>(&mut self, event: FormEvent, timers: &mut F) -> DispatchOutcome
    where
        T: From<ResetForm>,
        F: TimerFacility<T> + ?Sized,
    {
        match event {
            FormEvent::Submit => self.submit::<T, F>(timers),
            FormEvent::Completed { ticket, outcome } => {
                self.complete::<T, F>(ticket, outcome, timers)
            }
            FormEvent::ResetElapsed { handle, reset } => self.reset_elapsed(handle, reset),
        }
    }

    /// Cancel the outstanding reset timer.
    pub fn teardown<T, F>(&mut self, timers: &mut F)
    where
        F: TimerFacility<T> + ?Sized,
    {
        if let Some(handle) = self.reset.take() {
            timers.cancel(handle);
        }
        self.in_flight = None;
    }

    fn submit<T, F>(&mut self, timers: &mut F) -> DispatchOutcome
    where
        F: TimerFacility<T> + ?Sized,
    {
        if self.state.is_busy() {
            tracing::debug!(ticket = self.ticket, "Submit ignored while loading");
            return DispatchOutcome::Busy;
        }
        let payload = match self.fields.collect() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(error = %err, "Submit blocked by field validation");
                return DispatchOutcome::Blocked(err);
            }
        };

        // A new submit always wins over a pending reset.
        if let Some(handle) = self.reset.take() {
            timers.cancel(handle);
        }

        self.ticket += 1;
        self.in_flight = Some(self.ticket);
        self.apply(SubmissionIntent::Submit {
            pending_message: self.messages.pending.clone(),
        });
        tracing::info!(ticket = self.ticket, fields = payload.len(), "Submission started");

        DispatchOutcome::Started(SubmitRequest {
            ticket: self.ticket,
            payload,
        })
    }

    fn complete<T, F>(
        &mut self,
        ticket: u64,
        outcome: Result<(), String>,
        timers: &mut F,
    ) -> DispatchOutcome
    where
        T: From<ResetForm>,
        F: TimerFacility<T> + ?Sized,
    {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket, current = self.ticket, "Ignoring stale submission result");
            return DispatchOutcome::Ignored;
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                tracing::info!(ticket, "Submission resolved");
                self.apply(SubmissionIntent::Resolved {
                    message: self.messages.success.clone(),
                });
                self.fields.clear();
            }
            Err(fault) => {
                tracing::warn!(ticket, error = %fault, "Submission rejected");
                self.apply(SubmissionIntent::Rejected {
                    message: self.messages.failure.clone(),
                });
            }
        }

        let handle = timers.schedule(self.reset_delay, T::from(ResetForm { ticket }));
        self.reset = Some(handle);
        DispatchOutcome::Applied
    }

    fn reset_elapsed(&mut self, handle: CancelHandle, reset: ResetForm) -> DispatchOutcome {
        if self.reset != Some(handle) || reset.ticket != self.ticket {
            tracing::trace!(ticket = reset.ticket, "Ignoring stale reset timer");
            return DispatchOutcome::Ignored;
        }
        self.reset = None;
        self.apply(SubmissionIntent::ResetElapsed);
        DispatchOutcome::Applied
    }

    fn apply(&mut self, intent: SubmissionIntent) {
        self.state = SubmissionReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
