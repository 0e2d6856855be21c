//! Flash module
//!
//! Simulated flash sequence. Nothing is written to a device here: the
//! partition log, stage bars and reboot countdown are cosmetic.

use console::style;
use rand::Rng;
use std::io::Write;

use crate::config;
use crate::firmware::FirmwareDescriptor;
use crate::log_info;
use crate::terminal::{banner, print_success, Prompt};
use crate::utils::{animate_percent, pause, BarColor, Pacing};

const MODULE: &str = "flash";

/// One line pair of the partition log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionStep {
    Write(&'static str),
    Erase(&'static str),
}

impl PartitionStep {
    /// Log lines printed for this step
    pub fn lines(&self) -> Vec<String> {
        match self {
            PartitionStep::Write(name) => vec![
                format!("Writing '{}' partition...", name),
                "Writing image... OKAY".to_string(),
            ],
            PartitionStep::Erase(name) => vec![format!("Erasing '{}'... OKAY", name)],
        }
    }
}

/// Partition steps in flash order; zero-sized partitions are erased
pub fn partition_plan() -> Vec<PartitionStep> {
    config::flash::PARTITIONS
        .iter()
        .map(|&(name, size)| {
            if size > 0 {
                PartitionStep::Write(name)
            } else {
                PartitionStep::Erase(name)
            }
        })
        .collect()
}

/// Print the simulated device status block
///
/// Uses the active adb target as serial when there is one.
pub async fn device_check(
    prompt: &mut dyn Prompt,
    firmware: &FirmwareDescriptor,
    serial: Option<&str>,
    pacing: &Pacing,
) {
    prompt.clear();
    banner();
    println!("Detecting device...");
    pause(pacing.phase).await;

    let (serial, battery) = {
        let mut rng = rand::thread_rng();
        let serial = serial
            .map(str::to_string)
            .unwrap_or_else(|| rng.gen_range(100_000..=999_999).to_string());
        (serial, rng.gen_range(50..=100))
    };

    println!("Found device: {} (SN:{})", firmware.device, serial);
    println!("Device status:");
    println!("  Bootloader: unlocked");
    println!("  USB debugging: enabled");
    println!("  Battery: {}%", battery);
    pause(pacing.linger).await;
    prompt.clear();
}

/// Print the partition log with its fixed delays
pub async fn flash_partitions(firmware: &FirmwareDescriptor, pacing: &Pacing) {
    println!("\nFlash log:");
    println!("Target firmware: {}", firmware.name);
    println!("Device: {}", firmware.device);
    println!("System version: {}", firmware.version_label());
    println!("File size: {}\n", firmware.size_label());

    for step in partition_plan() {
        let lines = step.lines();
        match step {
            PartitionStep::Write(name) => {
                log_info!(MODULE, "Simulated write of partition {}", name);
                println!("{}", lines[0]);
                pause(pacing.partition_write).await;
                println!("{}", lines[1]);
                pause(pacing.partition_settle).await;
            }
            PartitionStep::Erase(name) => {
                log_info!(MODULE, "Simulated erase of partition {}", name);
                println!("{}", lines[0]);
                pause(pacing.partition_erase).await;
            }
        }
    }

    println!("\nVerifying partition integrity...");
    pause(pacing.phase).await;
    println!("Rebooting to system...");
    pause(pacing.phase).await;
}

async fn run_stage(
    prompt: &mut dyn Prompt,
    number: usize,
    title: &str,
    firmware: &FirmwareDescriptor,
    pacing: &Pacing,
) {
    banner();
    println!("Flash stage {}/{}: {}", number, config::flash::STAGES.len(), title);
    println!("Current firmware: {}", firmware.name);
    println!("Device: {}", firmware.device);
    println!("System: {}", firmware.system.to_uppercase());

    if number == 2 {
        flash_partitions(firmware, pacing).await;
        pause(pacing.phase).await;
    }

    animate_percent(pacing.stage_step, BarColor::Green).await;

    println!("\n\nStage complete");
    pause(pacing.phase).await;
    prompt.clear();
}

/// Run the whole simulated flash: device check, stages, summary, countdown
pub async fn run_flash(
    prompt: &mut dyn Prompt,
    firmware: &FirmwareDescriptor,
    serial: Option<&str>,
    pacing: &Pacing,
) {
    log_info!(
        MODULE,
        "Starting simulated flash of {} for {}",
        firmware.name,
        firmware.device
    );

    device_check(prompt, firmware, serial, pacing).await;

    for (index, title) in config::flash::STAGES.iter().enumerate() {
        run_stage(prompt, index + 1, title, firmware, pacing).await;
    }

    banner();
    print_success("Flash successful!\n");
    println!("Installed system: {}", firmware.system.to_uppercase());
    println!("Device model: {}", firmware.device);
    println!("Firmware file: {}", firmware.name);
    println!("First boot may take 3-5 minutes");

    println!(
        "\nDevice will reboot in {} seconds...",
        config::flash::REBOOT_COUNTDOWN_SECS
    );
    for remaining in (1..=config::flash::REBOOT_COUNTDOWN_SECS).rev() {
        print!("\rCountdown: {:02} s", remaining);
        let _ = std::io::stdout().flush();
        pause(pacing.countdown_tick).await;
    }

    prompt.clear();
    println!("{}", style("[Device rebooted]").green());
    log_info!(MODULE, "Simulated flash finished");
    pause(pacing.linger).await;
}
