//! Path management for daily-limit
//!
//! ## Path Resolution Order
//!
//! 1. `DAILY_LIMIT_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/daily-limit` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "DAILY_LIMIT_CONFIG_DIR";

/// Manages the paths used by daily-limit
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => ProjectDirs::from("", "", "daily-limit")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TrackerError::Config("Could not determine the home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ConfigPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}
