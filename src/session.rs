//! Session state
//!
//! The one context value threaded through every menu screen and action.

use std::path::PathBuf;
use std::time::Duration;

use crate::adb::AdbClient;
use crate::catalog::Catalog;
use crate::firmware::FirmwareDescriptor;
use crate::log_info;
use crate::settings::Settings;
use crate::utils::Pacing;

/// Process-lifetime state mutated by menu actions
#[derive(Debug)]
pub struct Session {
    /// Device tool client; holds the active target device
    pub adb: AdbClient,
    pub catalog: Catalog,
    /// Active firmware, at most one
    pub firmware: Option<FirmwareDescriptor>,
    /// Root of the `<system>/<device>/<file>` firmware layout
    pub firmware_root: PathBuf,
    pub pacing: Pacing,
}

impl Session {
    pub fn new(adb: AdbClient, firmware_root: PathBuf, pacing: Pacing) -> Self {
        Self {
            adb,
            catalog: Catalog,
            firmware: None,
            firmware_root,
            pacing,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let adb = AdbClient::new(
            settings.adb_path.clone(),
            Duration::from_secs(settings.command_timeout_secs),
        );
        let pacing = if settings.skip_animations {
            Pacing::instant()
        } else {
            Pacing::standard()
        };
        Self::new(adb, settings.firmware_root.clone(), pacing)
    }

    /// Replace the active firmware
    pub fn set_firmware(&mut self, firmware: FirmwareDescriptor) {
        log_info!(
            "session",
            "Active firmware: {} ({})",
            firmware.name,
            firmware.path.display()
        );
        self.firmware = Some(firmware);
    }
}
