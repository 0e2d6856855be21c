//! Application configuration
//!
//! Compile-time constants grouped by concern. Runtime overrides live in
//! [`crate::settings`].

/// Application identity
pub mod app {
    /// Directory name used under the platform cache/config dirs
    pub const NAME: &str = "adb-flasher";
    /// Version shown in the banner
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    /// Banner lines printed at the top of every screen
    pub const BANNER: &[&str] = &[
        "--------------------------",
        "|  ADB Flasher v4.0.0    |",
        "|  Core flashing tools   |",
        "|  50+ ADB functions     |",
        "--------------------------",
    ];
}

/// External device tool
pub mod adb {
    /// Default executable name, resolved through PATH
    pub const PROGRAM: &str = "adb";
    /// Upper bound on a single command, in seconds
    pub const COMMAND_TIMEOUT_SECS: u64 = 30;
    /// Sentinel returned when a command exceeds its time bound
    pub const TIMEOUT_ERROR: &str = "Error: Command timeout";
    /// Marker for a usable device in `adb devices` output
    pub const DEVICE_STATUS_MARKER: &str = "\tdevice";
}

/// Firmware layout and acquisition
pub mod firmware {
    /// Root directory for acquired firmware, relative to the working dir
    pub const ROOT_DIR: &str = "img";
    /// Extensions recognized by the local scan, in scan order
    pub const EXTENSIONS: &[&str] = &["zip", "img", "bin", "tgz"];
    /// Size used when the custom mirror entry is blank or invalid
    pub const DEFAULT_CUSTOM_SIZE_MB: u64 = 2000;
    /// Number of discrete steps in a percentage bar (0..=100)
    pub const PROGRESS_STEPS: u64 = 101;
    /// Buffer size used when hashing firmware content
    pub const HASH_BUFFER_SIZE: usize = 8192;
}

/// Simulated flash sequence
pub mod flash {
    /// (partition, nominal size); zero means the partition is erased
    pub const PARTITIONS: &[(&str, u64)] = &[
        ("boot", 4096),
        ("system", 4_096_000),
        ("vendor", 1_048_576),
        ("userdata", 0),
        ("recovery", 4096),
    ];
    /// Stage titles, in order. The second stage writes partitions.
    pub const STAGES: &[&str] = &[
        "Preparing flash environment",
        "Writing system image",
        "Final verification",
    ];
    /// Seconds counted down before the simulated reboot
    pub const REBOOT_COUNTDOWN_SECS: u64 = 10;
}

/// Action output limits
pub mod actions {
    /// Packages shown by the "list all" action
    pub const PACKAGE_PREVIEW: usize = 20;
    /// Properties shown by the getprop action
    pub const PROP_PREVIEW: usize = 30;
    /// Characters of `dumpsys package` output shown
    pub const APP_INFO_PREVIEW: usize = 1000;
    /// Default monkey event count
    pub const DEFAULT_MONKEY_EVENTS: &str = "1000";
    /// Default directory for the file listing action
    pub const DEFAULT_LIST_DIR: &str = "/sdcard";
    /// Refresh interval of the performance monitor, in seconds
    pub const MONITOR_INTERVAL_SECS: u64 = 3;
}

/// Logging
pub mod logging {
    /// Log file name inside the log directory
    pub const FILE_NAME: &str = "adb-flasher.log";
}
