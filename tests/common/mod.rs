//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_emailjs;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use termfolio::config::Config;
use termfolio::ui::app::{App, Page, UiCommand};
use termfolio::ui::input::handle_key;
use tokio::sync::mpsc;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App on the contact page with a channel standing in for the submit worker.
pub fn make_contact_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(&Config::default(), Page::Contact).expect("Default variants are valid");
    let (tx, rx) = mpsc::channel(8);
    app.attach_submitter(tx);
    (app, rx)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Fill name, email and message through key presses, leaving focus on the
/// send button.
pub fn fill_form(app: &mut App) {
    type_text(app, "Ada");
    press(app, KeyCode::Down);
    type_text(app, "ada@example.com");
    press(app, KeyCode::Down);
    type_text(app, "Hello there");
    press(app, KeyCode::Down);
}

/// Take the next submit command, panicking if there is none.
pub fn take_submit(rx: &mut mpsc::Receiver<UiCommand>) -> termfolio::ui::form::SubmitRequest {
    match rx.try_recv() {
        Ok(UiCommand::Submit(request)) => request,
        Err(err) => panic!("Expected a submit command: {}", err),
    }
}
