use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::motion::MotionError;

const APP_DIR: &str = "termfolio";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid animation variant: {0}")]
    Motion(#[from] MotionError),

    /// One or more numeric settings are out of range; `message` lists all of them.
    #[error("Invalid settings: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config_dir>/termfolio/config.toml`, or `./termfolio/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read, parse and validate `path`. A missing file is not an error:
    /// every section falls back to its defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Variants must build; the redraw interval and the reset delay must be
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.variants.build()?;

        let mut problems = Vec::new();
        if self.motion.tick_ms == 0 {
            problems.push("motion.tick_ms must be greater than zero");
        }
        if self.form.reset_ms == 0 {
            problems.push("form.reset_ms must be greater than zero");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError {
                message: problems.join("; "),
            })
        }
    }
}
