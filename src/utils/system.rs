//! System directories and clock helpers

use std::path::PathBuf;

/// Per-user cache directory for the application (logs live here)
pub fn get_cache_dir(app_name: &str) -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(app_name)
}

/// Per-user config directory for the application (settings.json lives here)
pub fn get_config_dir(app_name: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(app_name)
}

/// Seconds since the Unix epoch, used to name generated files
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
