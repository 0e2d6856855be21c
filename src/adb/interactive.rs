//! Interactive and streaming commands
//!
//! These hand the terminal to `adb` (shell sessions, logcat, screenrecord)
//! and return when the command exits or the operator presses Ctrl-C.

use std::process::Stdio;

use super::{shell_command, AdbClient, MODULE};
use crate::{log_info, log_warn};

/// How a streaming command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    /// The command exited on its own, with its exit code if any
    Exited(Option<i32>),
    /// The operator pressed Ctrl-C
    Interrupted,
    /// The command could not be started or awaited
    Failed(String),
}

impl AdbClient {
    /// Run a fragment with the terminal attached, until exit or Ctrl-C
    ///
    /// Always scoped to the active device when one is selected.
    pub async fn run_interactive(&self, fragment: &str) -> StreamEnd {
        let line = self.invocation(fragment, true);
        log_info!(MODULE, "Starting interactive command: {}", line);

        let mut child = match shell_command(&line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log_warn!(MODULE, "Failed to start '{}': {}", line, e);
                return StreamEnd::Failed(e.to_string());
            }
        };

        tokio::select! {
            status = child.wait() => match status {
                Ok(status) => {
                    log_info!(MODULE, "Interactive command exited: {}", status);
                    StreamEnd::Exited(status.code())
                }
                Err(e) => {
                    log_warn!(MODULE, "Failed to wait for '{}': {}", line, e);
                    StreamEnd::Failed(e.to_string())
                }
            },
            _ = tokio::signal::ctrl_c() => {
                log_info!(MODULE, "Interactive command interrupted: {}", line);
                let _ = child.kill().await;
                StreamEnd::Interrupted
            }
        }
    }
}
