//! State for the submission state machine.

use crate::ui::mvi::UiState;

/// Phase of an async send-and-feedback interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing in flight, no feedback shown.
    #[default]
    Idle,
    /// Waiting for the submit capability.
    Loading,
    /// Capability resolved; reset timer armed.
    Success,
    /// Capability rejected; reset timer armed.
    Error,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Status plus the user-facing message for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub message: String,
}

impl UiState for SubmissionState {}

impl SubmissionState {
    pub fn new(status: SubmissionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// True while a submission is in flight. The send control and the
    /// inputs are disabled in this state.
    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// Check if the status message should be shown.
    pub fn shows_feedback(&self) -> bool {
        self.status != SubmissionStatus::Idle
    }

    /// True in the states that arm the reset timer.
    pub fn awaiting_reset(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        )
    }
}
