//! Firmware module
//!
//! The firmware descriptor held by the session, its fingerprints, and
//! discovery of firmware files already on disk.

mod fingerprint;
mod local;

pub use fingerprint::{content_sha256, placeholder_fingerprint};
pub use local::{analyze, scan};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::format_gb;

/// Where a firmware descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmwareSource {
    /// Catalog lookup on the official mirror
    OfficialMirror,
    /// Filename and size typed in by the operator
    CustomMirror,
    /// File found or entered from the local filesystem
    Local,
}

impl FirmwareSource {
    pub fn label(self) -> &'static str {
        match self {
            FirmwareSource::OfficialMirror => "Official mirror",
            FirmwareSource::CustomMirror => "Custom mirror",
            FirmwareSource::Local => "Local file",
        }
    }
}

/// The firmware selected for flashing
///
/// Replaced wholesale whenever another firmware is acquired or selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareDescriptor {
    /// File name
    pub name: String,
    /// System family key (e.g., "pixel"), or "unknown"
    pub system: String,
    /// Device model
    pub device: String,
    /// Version label chosen in the wizard
    pub version: Option<String>,
    /// Channel name ("stable", "beta", "custom")
    pub channel: Option<String>,
    /// File size in bytes
    pub size_bytes: u64,
    /// Placeholder fingerprint (path and size, not content)
    pub fingerprint: String,
    pub source: FirmwareSource,
    pub path: PathBuf,
    /// Acquisition date, or modification time for local files
    pub build_date: String,
}

impl FirmwareDescriptor {
    /// Size as shown in summaries (e.g., "2.64 GB")
    pub fn size_label(&self) -> String {
        format_gb(self.size_bytes)
    }

    /// Version label, or a placeholder when none was chosen
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("Unknown version")
    }
}
