//! Application configuration.
//!
//! Settings are read from `config.toml` in the platform config directory
//! (`~/.config/content-creator/config.toml` on Linux). Every field is optional; missing fields
//! take their defaults. Two environment variables override the file:
//!
//! - `CONTENT_CREATOR_EXPORT_DIR` - directory exported files are written to
//! - `CONTENT_CREATOR_LATENCY_MS` - simulated generation latency in milliseconds

use crate::app::history::PREVIEW_CHARS;
use crate::{trace_info, trace_warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const EXPORT_DIR_ENV: &str = "CONTENT_CREATOR_EXPORT_DIR";
pub const LATENCY_ENV: &str = "CONTENT_CREATOR_LATENCY_MS";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay of the simulated content provider
    pub simulated_latency_ms: u64,
    /// Where exports are written. `None` means the user's Downloads directory.
    pub export_dir: Option<PathBuf>,
    /// Length of history previews
    pub preview_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            export_dir: None,
            preview_chars: PREVIEW_CHARS,
        }
    }
}

impl AppConfig {
    /// Load from the default location and the process environment.
    ///
    /// Problems are logged and fall back to defaults; configuration never stops the app
    /// from starting.
    pub fn load() -> Self {
        Self::load_with(Self::config_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Read `path` if it exists, then apply overrides from `lookup`. Logs and never fails.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => match Self::load_from_file(path) {
                Ok(config) => {
                    trace_info!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    trace_warn!("{}; using default configuration", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        if let Err(e) = config.apply_env_overrides(lookup) {
            trace_warn!("Ignoring environment override: {}", e);
        }
        config
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "content-creator")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Valid overrides are applied even when another one is rejected.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(EXPORT_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            self.export_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup(LATENCY_ENV) {
            match value.trim().parse() {
                Ok(latency_ms) => self.simulated_latency_ms = latency_ms,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: LATENCY_ENV.to_string(),
                        value,
                    })
                }
            }
        }

        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Configured export directory, else Downloads, else the working directory.
    pub fn resolved_export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
