//! Persisted settings
//!
//! Reads `settings.json` from the per-user config directory. Every field is
//! optional in the file; missing fields and a missing or malformed file fall
//! back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config;
use crate::utils::get_config_dir;
use crate::{log_info, log_warn};

const MODULE: &str = "settings";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// User-adjustable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enables DEBUG logging
    pub developer_mode: bool,
    /// Path or name of the adb executable
    pub adb_path: String,
    /// Root directory for acquired and scanned firmware
    pub firmware_root: PathBuf,
    /// Time bound for a single adb command
    pub command_timeout_secs: u64,
    /// Run simulated sequences without delays
    pub skip_animations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            developer_mode: false,
            adb_path: config::adb::PROGRAM.to_string(),
            firmware_root: PathBuf::from(config::firmware::ROOT_DIR),
            command_timeout_secs: config::adb::COMMAND_TIMEOUT_SECS,
            skip_animations: false,
        }
    }
}

impl Settings {
    /// Default location of the settings file
    pub fn default_path() -> PathBuf {
        get_config_dir(config::app::NAME).join(SETTINGS_FILE)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log_info!(
                MODULE,
                "No settings file at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::read(path) {
            Ok(settings) => {
                log_info!(MODULE, "Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log_warn!(MODULE, "{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let mut settings: Settings = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

        if settings.command_timeout_secs == 0 {
            settings.command_timeout_secs = config::adb::COMMAND_TIMEOUT_SECS;
        }
        if settings.adb_path.trim().is_empty() {
            settings.adb_path = config::adb::PROGRAM.to_string();
        }
        Ok(settings)
    }
}
