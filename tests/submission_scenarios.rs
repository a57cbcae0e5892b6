mod common;

use common::ms;
use termfolio::config::FormConfig;
use termfolio::motion::{Scheduler, TimerFacility};
use termfolio::ui::form::{
    DispatchOutcome, FormController, FormEvent, FormFields, ResetForm, SubmissionState,
    SubmissionStatus, SubmitRequest,
};

const CONFIRMATION: &str = "Thank you! Your message has been sent successfully.";
const FAILURE: &str = "Failed to send message. Please try again later.";

struct Harness {
    form: FormController,
    timers: Scheduler<ResetForm>,
    /// Every request handed to the capability, in order.
    sent: Vec<SubmitRequest>,
    transitions: Vec<SubmissionStatus>,
}

impl Harness {
    fn new() -> Self {
        let mut fields = FormFields::contact();
        fields.set_value("name", "A");
        fields.set_value("email", "a@x.com");
        fields.set_value("message", "hi");
        Self {
            form: FormController::new(fields, &FormConfig::default()),
            timers: Scheduler::new(),
            sent: Vec::new(),
            transitions: Vec::new(),
        }
    }

    fn dispatch(&mut self, event: FormEvent) -> DispatchOutcome {
        let before = self.form.state().status;
        let outcome = self.form.dispatch::<ResetForm, _>(event, &mut self.timers);
        if let DispatchOutcome::Started(request) = &outcome {
            self.sent.push(request.clone());
        }
        let after = self.form.state().status;
        if after != before {
            self.transitions.push(after);
        }
        outcome
    }

    fn submit(&mut self) -> DispatchOutcome {
        self.dispatch(FormEvent::Submit)
    }

    fn complete(&mut self, outcome: Result<(), String>) {
        let ticket = self.sent.last().expect("a request was sent").ticket;
        self.dispatch(FormEvent::Completed { ticket, outcome });
    }

    fn run_until(&mut self, until: std::time::Duration) {
        while let Some(fired) = self.timers.pop_due(until) {
            self.dispatch(FormEvent::ResetElapsed {
                handle: fired.handle,
                reset: fired.payload,
            });
        }
        self.timers.settle(until);
    }

    fn refill(&mut self) {
        let fields = self.form.fields_mut().expect("fields are editable");
        fields.set_value("name", "A");
        fields.set_value("email", "a@x.com");
        fields.set_value("message", "hi");
    }
}

#[test]
fn success_then_reset_after_five_seconds() {
    let mut h = Harness::new();

    h.submit();
    assert_eq!(h.form.state().status, SubmissionStatus::Loading);
    let payload = &h.sent[0].payload;
    assert_eq!(payload.get("name"), Some("A"));
    assert_eq!(payload.get("email"), Some("a@x.com"));
    assert_eq!(payload.get("message"), Some("hi"));

    h.complete(Ok(()));
    assert_eq!(
        *h.form.state(),
        SubmissionState::new(SubmissionStatus::Success, CONFIRMATION)
    );

    h.run_until(ms(4999));
    assert_eq!(h.form.state().status, SubmissionStatus::Success);

    h.run_until(ms(5000));
    assert_eq!(*h.form.state(), SubmissionState::default());
    assert_eq!(
        h.transitions,
        vec![
            SubmissionStatus::Loading,
            SubmissionStatus::Success,
            SubmissionStatus::Idle
        ]
    );
}

#[test]
fn resubmit_during_error_preempts_reset() {
    let mut h = Harness::new();

    h.submit();
    h.complete(Err("network down".to_string()));
    assert_eq!(
        *h.form.state(),
        SubmissionState::new(SubmissionStatus::Error, FAILURE)
    );
    let old_reset = h.form.pending_reset().expect("reset armed");

    h.run_until(ms(1000));
    let outcome = h.submit();
    assert!(matches!(outcome, DispatchOutcome::Started(_)));
    assert_eq!(h.form.state().status, SubmissionStatus::Loading);
    assert!(!h.timers.is_pending(old_reset));

    // Past the old deadline while the new submission is still in flight.
    h.run_until(ms(5500));
    assert_eq!(h.form.state().status, SubmissionStatus::Loading);

    h.complete(Ok(()));
    h.run_until(ms(10_499));
    assert_eq!(h.form.state().status, SubmissionStatus::Success);
    h.run_until(ms(10_500));
    assert_eq!(h.form.state().status, SubmissionStatus::Idle);
}

#[test]
fn second_submit_while_loading_never_reaches_capability() {
    let mut h = Harness::new();
    h.submit();
    for _ in 0..3 {
        assert_eq!(h.submit(), DispatchOutcome::Busy);
    }
    assert_eq!(h.sent.len(), 1);
}

#[test]
fn exactly_one_outcome_follows_loading() {
    let mut h = Harness::new();
    h.submit();
    h.complete(Ok(()));
    h.complete(Err("late failure".to_string()));
    assert_eq!(h.form.state().status, SubmissionStatus::Success);
    assert_eq!(
        h.transitions,
        vec![SubmissionStatus::Loading, SubmissionStatus::Success]
    );
}

#[test]
fn success_clears_fields_and_failure_keeps_them() {
    let mut h = Harness::new();
    h.submit();
    h.complete(Err("boom".to_string()));
    assert_eq!(h.form.fields().value("message"), Some("hi"));

    h.submit();
    h.complete(Ok(()));
    assert_eq!(h.form.fields().value("message"), Some(""));
}

#[test]
fn reset_timer_is_armed_relative_to_completion() {
    let mut h = Harness::new();
    h.submit();
    h.run_until(ms(700));
    h.complete(Ok(()));
    let handle = h.form.pending_reset().unwrap();
    assert_eq!(h.timers.due_at(handle), Some(ms(5700)));
    assert_eq!(h.timers.now(), ms(700));

    h.refill();
    h.submit();
    assert_eq!(h.form.pending_reset(), None);
}
