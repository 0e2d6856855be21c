//! ADB module
//!
//! Thin wrapper around the external `adb` executable. Every command is a
//! fragment appended to `adb [-s <serial>]` and run through the platform
//! shell, so fragments may use pipes and redirects.
//!
//! Results are plain strings: trimmed stdout on success, or a line starting
//! with `Error:` on failure. Callers display them as-is.

mod interactive;

pub use interactive::StreamEnd;

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config;
use crate::terminal::Prompt;
use crate::utils::parse_index;
use crate::{log_debug, log_info, log_warn};

const MODULE: &str = "adb";

/// Prefix shared by every failed command result
pub const ERROR_PREFIX: &str = "Error:";

/// Client for the external device tool, holding the active target device
#[derive(Debug, Clone)]
pub struct AdbClient {
    program: String,
    timeout: Duration,
    current_device: Option<String>,
    /// Serials from the most recent listing
    connected_devices: Vec<String>,
}

impl AdbClient {
    /// Create a client for `program` with a per-command time bound
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
            current_device: None,
            connected_devices: Vec::new(),
        }
    }

    /// Serial of the active target device, if one was selected
    pub fn current_device(&self) -> Option<&str> {
        self.current_device.as_deref()
    }

    /// Make `serial` the active target device
    pub fn set_current_device(&mut self, serial: impl Into<String>) {
        let serial = serial.into();
        log_info!(MODULE, "Active device set to {}", serial);
        self.current_device = Some(serial);
    }

    /// Build the full command line for a fragment
    ///
    /// The `-s <serial>` scope is added only when `scoped` is requested and a
    /// device is selected.
    pub fn invocation(&self, fragment: &str, scoped: bool) -> String {
        match (&self.current_device, scoped) {
            (Some(serial), true) => format!("{} -s {} {}", self.program, serial, fragment),
            _ => format!("{} {}", self.program, fragment),
        }
    }

    /// Run a command fragment and capture its output
    ///
    /// Never fails: timeouts, spawn failures and non-zero exits come back as
    /// strings starting with `Error:`.
    pub async fn run(&self, fragment: &str, scoped: bool) -> String {
        let line = self.invocation(fragment, scoped);
        log_debug!(MODULE, "Running: {}", line);

        let child = shell_command(&line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                log_warn!(MODULE, "Failed to start '{}': {}", line, e);
                return format!("{} {}", ERROR_PREFIX, e);
            }
        };

        // Dropping the wait future on timeout drops the child, which kills it
        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Err(_) => {
                log_warn!(
                    MODULE,
                    "Command timed out after {}s: {}",
                    self.timeout.as_secs_f64(),
                    line
                );
                config::adb::TIMEOUT_ERROR.to_string()
            }
            Ok(Err(e)) => {
                log_warn!(MODULE, "Failed to collect output of '{}': {}", line, e);
                format!("{} {}", ERROR_PREFIX, e)
            }
            Ok(Ok(output)) => {
                if output.status.success() {
                    String::from_utf8_lossy(&output.stdout).trim().to_string()
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    log_debug!(
                        MODULE,
                        "Command exited with {}: {}",
                        output.status,
                        stderr.trim()
                    );
                    format!("{} {}", ERROR_PREFIX, stderr.trim())
                }
            }
        }
    }

    /// List attached devices in the `device` state and remember them
    pub async fn list(&mut self) -> Vec<String> {
        let output = self.run("devices", false).await;
        if is_error(&output) {
            log_warn!(MODULE, "Device listing failed: {}", output);
        }

        let devices = parse_device_list(&output);
        log_info!(MODULE, "Found {} connected device(s)", devices.len());
        self.connected_devices = devices.clone();
        devices
    }

    /// Let the operator pick the active target device
    ///
    /// Returns false when no device is attached or the entry is not a valid
    /// 1-based index.
    pub async fn select(&mut self, prompt: &mut dyn Prompt) -> bool {
        self.list().await;
        if self.connected_devices.is_empty() {
            println!("No connected devices found");
            return false;
        }

        println!("\nConnected devices:");
        for (i, device) in self.connected_devices.iter().enumerate() {
            println!("{}. {}", i + 1, device);
        }

        let choice = prompt.read_line("\nSelect device (enter number): ");
        match parse_index(&choice, self.connected_devices.len()) {
            Some(index) => {
                let serial = self.connected_devices[index].clone();
                println!("Selected device: {}", serial);
                self.set_current_device(serial);
                true
            }
            None => {
                log_debug!(MODULE, "Invalid device selection: '{}'", choice);
                false
            }
        }
    }
}

/// Whether a command result is an error string
pub fn is_error(output: &str) -> bool {
    output.starts_with(ERROR_PREFIX)
}

/// Parse `adb devices` output into serials of usable devices
///
/// The first line is the header. Devices in other states (offline,
/// unauthorized, ...) are skipped.
pub fn parse_device_list(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty() && line.contains(config::adb::DEVICE_STATUS_MARKER))
        .filter_map(|line| line.split('\t').next())
        .map(|serial| serial.trim().to_string())
        .filter(|serial| !serial.is_empty())
        .collect()
}

/// Command that runs `line` through the platform shell
fn shell_command(line: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", line]);
        cmd
    }

    #[cfg(not(target_os = "windows"))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", line]);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::testing::ScriptedPrompt;

    fn client() -> AdbClient {
        AdbClient::new("adb", Duration::from_secs(30))
    }

    #[test]
    fn test_parse_device_list_skips_offline() {
        let output = "List of devices attached\nABC123\tdevice\nXYZ\toffline\n";
        assert_eq!(parse_device_list(output), vec!["ABC123".to_string()]);
    }

    #[test]
    fn test_parse_device_list_edge_cases() {
        assert!(parse_device_list("").is_empty());
        assert!(parse_device_list("List of devices attached\n\n").is_empty());
        assert!(parse_device_list("Error: adb: not found").is_empty());

        let output = "List of devices attached\nemulator-5554\tdevice\nR58M\tunauthorized\n192.168.1.5:5555\tdevice\n";
        assert_eq!(
            parse_device_list(output),
            vec!["emulator-5554".to_string(), "192.168.1.5:5555".to_string()]
        );
    }

    #[test]
    fn test_invocation_scoping() {
        let mut adb = client();
        assert_eq!(adb.invocation("shell pwd", true), "adb shell pwd");

        adb.set_current_device("ABC123");
        assert_eq!(adb.invocation("shell pwd", true), "adb -s ABC123 shell pwd");
        assert_eq!(adb.invocation("devices", false), "adb devices");
    }

    #[test]
    fn test_is_error() {
        assert!(is_error("Error: Command timeout"));
        assert!(!is_error("/sdcard"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_returns_trimmed_stdout() {
        let runner = AdbClient::new("echo", Duration::from_secs(5));
        assert_eq!(runner.run("  hello world", false).await, "hello world");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_stderr_on_failure() {
        let runner = AdbClient::new("sh", Duration::from_secs(5));
        let output = runner.run("-c 'echo boom >&2; exit 3'", false).await;
        assert_eq!(output, "Error: boom");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_times_out() {
        let runner = AdbClient::new("sleep", Duration::from_millis(200));
        assert_eq!(runner.run("5", false).await, config::adb::TIMEOUT_ERROR);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_and_select_with_fake_tool() {
        // `printf` stands in for adb: "devices" becomes the format argument
        let mut adb = AdbClient::new(
            "printf 'List of devices attached\\nABC123\\tdevice\\nXYZ\\toffline\\n' #",
            Duration::from_secs(5),
        );
        assert!(adb.connected_devices.is_empty());
        assert_eq!(adb.list().await, vec!["ABC123".to_string()]);
        assert_eq!(adb.connected_devices, vec!["ABC123".to_string()]);

        let mut prompt = ScriptedPrompt::chars("", &["1"]);
        assert!(adb.select(&mut prompt).await);
        assert_eq!(adb.current_device(), Some("ABC123"));

        let mut prompt = ScriptedPrompt::chars("", &["7"]);
        assert!(!adb.select(&mut prompt).await);
        assert_eq!(adb.current_device(), Some("ABC123"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_select_with_no_devices() {
        let mut adb = AdbClient::new("true", Duration::from_secs(5));
        let mut prompt = ScriptedPrompt::chars("", &["1"]);
        assert!(!adb.select(&mut prompt).await);
        assert_eq!(adb.current_device(), None);
        assert!(adb.connected_devices.is_empty());
    }
}
