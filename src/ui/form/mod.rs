//! Contact form feature module.
//!
//! Async send-and-feedback interaction, independent of any transport.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Submission status and message
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Side effects: tickets, reset timer, field clearing
//! - `fields.rs` - Declared inputs and payload collection
//! - `view.rs` - Rendering

mod controller;
mod fields;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{
    DispatchOutcome, FormController, FormEvent, FormMessages, ResetForm, SubmitRequest,
};
pub use fields::{FieldError, FieldSpec, FormFields, FormPayload};
pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::{SubmissionState, SubmissionStatus};
pub use view::{render_form, FormScopes};
