use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file: `<data_dir>/termfolio/termfolio.log`.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("termfolio").join("termfolio.log")
}

/// Initialize tracing into a log file.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout or
/// stderr once the app is running. `RUST_LOG` overrides `level`. Returns the
/// log path, or `None` if the file could not be opened.
pub fn init_tracing(log_file: Option<&Path>, level: &str) -> Option<PathBuf> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Warning: Failed to create log directory {}: {}", parent.display(), err);
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing was already initialized");
    }

    Some(path)
}
