//! Intents for the submission state machine.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the submission reducer.
#[derive(Debug, Clone)]
pub enum SubmissionIntent {
    /// User submitted a valid payload.
    Submit {
        /// Notice shown while the capability runs.
        pending_message: String,
    },

    /// The submit capability resolved.
    Resolved {
        /// Confirmation notice.
        message: String,
    },

    /// The submit capability rejected.
    Rejected {
        /// Failure notice.
        message: String,
    },

    /// The reset timer fired.
    ResetElapsed,
}

impl Intent for SubmissionIntent {}
