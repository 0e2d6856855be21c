//! Logging module
//!
//! File-backed, module-tagged logging. The terminal is owned by the menu,
//! so log lines go to `<cache dir>/adb-flasher/logs/adb-flasher.log`.
//!
//! Use the `log_debug!`, `log_info!`, `log_warn!` and `log_error!` macros:
//!
//! ```ignore
//! log_info!("adb", "Selected device: {}", serial);
//! ```

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::config;
use crate::utils::get_cache_dir;

/// Open log file, if [`init`] succeeded
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Whether DEBUG lines are written (developer mode)
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Directory holding the log file
pub fn log_dir() -> PathBuf {
    get_cache_dir(config::app::NAME).join("logs")
}

/// Initialize the logging system
///
/// Failure to open the log file is not fatal: logging is simply disabled.
pub fn init() {
    let dir = log_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(config::logging::FILE_NAME));

    if let Ok(file) = file {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }
}

/// Switch between INFO (default) and DEBUG
pub fn set_log_level(developer_mode: bool) {
    DEBUG_ENABLED.store(developer_mode, Ordering::SeqCst);
}

/// Whether DEBUG lines are currently written
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Format one log line (without trailing newline)
fn format_line(level: Level, module: &str, args: fmt::Arguments) -> String {
    format!(
        "[{}] [{}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level.as_str(),
        module,
        args
    )
}

/// Write a log line. Called through the logging macros.
#[doc(hidden)]
pub fn write(level: Level, module: &str, args: fmt::Arguments) {
    if level == Level::Debug && !is_debug_enabled() {
        return;
    }

    let line = format_line(level, module, args);
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Debug, $module, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Info, $module, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Warn, $module, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Error, $module, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, "adb", format_args!("device {} offline", "XYZ"));
        assert!(line.contains("[WARN] [adb] device XYZ offline"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_macros_without_init_do_not_panic() {
        crate::log_info!("tests", "no file open: {}", 1);
        crate::log_debug!("tests", "debug filtered");
    }
}
