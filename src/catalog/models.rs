//! Catalog data models
//!
//! Types describing system families, release channels and catalog entries.

use serde::{Deserialize, Serialize};

/// A firmware-producing system family shown in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemFamily {
    /// Lookup key and directory name (e.g., "pixel")
    pub key: &'static str,
    /// Menu label
    pub label: &'static str,
}

/// Release track of a catalog lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Beta,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
        }
    }

    /// Parse a channel name ("stable" / "beta")
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stable" => Some(Channel::Stable),
            "beta" => Some(Channel::Beta),
            _ => None,
        }
    }
}

/// Placeholder file recorded for a (system, device, channel) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirmwareInfo {
    pub filename: &'static str,
    pub size_mb: u64,
}

/// One row of the static firmware table
#[derive(Debug, Clone, Copy)]
pub(super) struct CatalogEntry {
    pub system: &'static str,
    pub channel: Channel,
    pub device: &'static str,
    pub info: FirmwareInfo,
}
