//! Reducer for the submission state machine.

use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::{SubmissionState, SubmissionStatus};

/// Pure transitions of `idle -> loading -> (success | error) -> idle`.
pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionState;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SubmissionIntent::Submit { pending_message } => match state.status {
                // At most one submission in flight.
                SubmissionStatus::Loading => state,
                _ => SubmissionState::new(SubmissionStatus::Loading, pending_message),
            },

            SubmissionIntent::Resolved { message } => match state.status {
                SubmissionStatus::Loading => SubmissionState::new(SubmissionStatus::Success, message),
                _ => state,
            },

            SubmissionIntent::Rejected { message } => match state.status {
                SubmissionStatus::Loading => SubmissionState::new(SubmissionStatus::Error, message),
                _ => state,
            },

            SubmissionIntent::ResetElapsed => {
                if state.awaiting_reset() {
                    SubmissionState::default()
                } else {
                    state
                }
            }
        }
    }
}
