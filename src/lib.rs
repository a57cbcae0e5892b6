//! `termfolio`: a personal portfolio rendered as a full-screen terminal app.
//!
//! - [`motion`]: staggered entrance animations on a virtual clock
//! - [`ui::form`]: the contact form's send-and-feedback state machine
//! - [`contact`]: delivery of form payloads (EmailJS or dry run)

pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod motion;
pub mod shutdown;
pub mod ui;
