//! Firmware catalog module
//!
//! Fixed tables mapping (system family, device model, channel) to a
//! placeholder filename and size. Lookups are pure: no I/O, no mutation,
//! and unknown keys yield empty results.

mod models;

pub use models::{Channel, FirmwareInfo, SystemFamily};

use models::CatalogEntry;

const SYSTEMS: &[SystemFamily] = &[
    SystemFamily {
        key: "xiaomi",
        label: "Xiaomi (MIUI/HyperOS)",
    },
    SystemFamily {
        key: "pixel",
        label: "Google Pixel",
    },
    SystemFamily {
        key: "samsung",
        label: "Samsung",
    },
    SystemFamily {
        key: "oneplus",
        label: "OnePlus",
    },
];

const DEVICES: &[(&str, &[&str])] = &[
    (
        "xiaomi",
        &["Xiaomi 14", "Xiaomi 13 Pro", "Xiaomi 13", "Xiaomi 12S Ultra"],
    ),
    ("pixel", &["Pixel 8 Pro", "Pixel 8", "Pixel 7 Pro", "Pixel 7"]),
    ("samsung", &["Galaxy S24 Ultra", "Galaxy S24+", "Galaxy S24"]),
    ("oneplus", &["OnePlus 12", "OnePlus 11", "OnePlus 10 Pro"]),
];

const VERSIONS: &[(&str, &[&str])] = &[
    ("xiaomi", &["HyperOS 1.0", "MIUI 14", "MIUI 13"]),
    ("pixel", &["Android 14 QPR3", "Android 14 QPR2", "Android 14"]),
    ("samsung", &["One UI 6.1", "One UI 6.0", "One UI 5.1"]),
    ("oneplus", &["OxygenOS 14", "OxygenOS 13.1", "OxygenOS 13"]),
];

const fn entry(
    system: &'static str,
    channel: Channel,
    device: &'static str,
    filename: &'static str,
    size_mb: u64,
) -> CatalogEntry {
    CatalogEntry {
        system,
        channel,
        device,
        info: FirmwareInfo { filename, size_mb },
    }
}

const FIRMWARE: &[CatalogEntry] = &[
    entry("xiaomi", Channel::Stable, "Xiaomi 14", "xiaomi14_stable_os.zip", 4500),
    entry(
        "xiaomi",
        Channel::Stable,
        "Xiaomi 13",
        "miui_FUXI_V14.0.12.11.19_STABLE.zip",
        4200,
    ),
    entry(
        "xiaomi",
        Channel::Stable,
        "Xiaomi 13 Pro",
        "miui_NUWA_V14.0.12.11.19_STABLE.zip",
        4300,
    ),
    entry("xiaomi", Channel::Beta, "Xiaomi 14", "fuxi_pre_dpp_images.tgz", 3800),
    entry(
        "xiaomi",
        Channel::Beta,
        "Xiaomi 13",
        "fuxi_pre_dpp_images_23.5.6.tgz",
        3600,
    ),
    entry("pixel", Channel::Stable, "Pixel 8 Pro", "husky-stable-factory.zip", 2800),
    entry("pixel", Channel::Stable, "Pixel 8", "shiba-stable-factory.zip", 2700),
    entry("pixel", Channel::Beta, "Pixel 8 Pro", "husky-beta-ota.zip", 2600),
    entry("pixel", Channel::Beta, "Pixel 8", "shiba-beta-ota.zip", 2500),
];

/// Static firmware catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// System families offered by the wizard, in menu order
    pub fn systems(&self) -> &'static [SystemFamily] {
        SYSTEMS
    }

    /// Device models listed for a system family
    pub fn devices_for(&self, system: &str) -> &'static [&'static str] {
        lookup(DEVICES, system)
    }

    /// Version labels listed for a device (the same for every device of a family)
    pub fn versions_for(&self, system: &str, _device: &str) -> &'static [&'static str] {
        lookup(VERSIONS, system)
    }

    /// Recorded placeholder for a (system, device, channel) combination
    pub fn firmware_info(&self, system: &str, device: &str, channel: &str) -> Option<FirmwareInfo> {
        let channel = Channel::parse(channel)?;
        FIRMWARE
            .iter()
            .find(|e| e.system == system && e.device == device && e.channel == channel)
            .map(|e| e.info)
    }
}

fn lookup(table: &'static [(&'static str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}
