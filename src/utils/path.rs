//! Path utility functions
//!
//! Common path manipulation helpers used across the application.

use std::path::{Path, PathBuf};

use crate::config;

/// Directory name for a device model (spaces stripped, "Pixel 8 Pro" -> "Pixel8Pro")
pub fn device_dir_name(device: &str) -> String {
    device.chars().filter(|c| *c != ' ').collect()
}

/// Where an acquired firmware file lives: `<root>/<system>/<device>/<filename>`
pub fn firmware_path(root: &Path, system: &str, device: &str, filename: &str) -> PathBuf {
    root.join(system).join(device_dir_name(device)).join(filename)
}

/// Check whether a file has one of the recognized firmware extensions
///
/// # Returns
/// The matching extension from [`config::firmware::EXTENSIONS`], if any
pub fn firmware_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    config::firmware::EXTENSIONS
        .iter()
        .copied()
        .find(|known| *known == ext)
}
