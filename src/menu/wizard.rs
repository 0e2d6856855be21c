//! Firmware acquisition wizard
//!
//! System, device, version and channel list screens, then the custom mirror
//! form when channel 3 is picked. Escape on any step abandons the wizard.

use crate::acquire::{perform_download, AcquireRequest, ChannelChoice};
use crate::catalog::Channel;
use crate::config;
use crate::log_info;
use crate::session::Session;
use crate::terminal::{show_header, Key, Prompt};
use crate::utils::unix_timestamp;

const MODULE: &str = "menu::wizard";

/// Show a numbered list and wait for a valid digit or Escape
///
/// Returns the zero-based index of the chosen item.
fn choose(prompt: &mut dyn Prompt, title: &str, items: &[&str]) -> Option<usize> {
    show_header(prompt, title);
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
    println!("ESC. Back to main menu");

    loop {
        match prompt.read_key() {
            Key::Escape => return None,
            Key::Char(c) => {
                if let Some(index) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .filter(|i| *i < items.len())
                {
                    return Some(index);
                }
            }
            Key::Enter | Key::Other => {}
        }
    }
}

/// Build the custom mirror choice from raw form input
///
/// A blank filename gets a timestamped default; a blank or non-numeric size
/// falls back to the default size.
pub fn custom_choice(filename: &str, size: &str, now: i64) -> ChannelChoice {
    let filename = match filename.trim() {
        "" => format!("custom_firmware_{}.zip", now),
        name => name.to_string(),
    };
    let size_mb = size
        .trim()
        .parse::<u64>()
        .unwrap_or(config::firmware::DEFAULT_CUSTOM_SIZE_MB);
    ChannelChoice::Custom { filename, size_mb }
}

fn custom_mirror_form(prompt: &mut dyn Prompt) -> ChannelChoice {
    show_header(prompt, "Custom mirror");
    println!("Leave blank to use the defaults.");
    let filename = prompt.read_line("File name: ");
    let size = prompt.read_line(&format!(
        "File size in MB [{}]: ",
        config::firmware::DEFAULT_CUSTOM_SIZE_MB
    ));
    custom_choice(&filename, &size, unix_timestamp())
}

fn select_channel(prompt: &mut dyn Prompt) -> Option<ChannelChoice> {
    let index = choose(
        prompt,
        "Select update channel:",
        &["Stable", "Beta", "Custom mirror"],
    )?;
    Some(match index {
        0 => ChannelChoice::Catalog(Channel::Stable),
        1 => ChannelChoice::Catalog(Channel::Beta),
        _ => custom_mirror_form(prompt),
    })
}

/// Collect a request through the list screens; None when abandoned
pub fn collect_request(session: &Session, prompt: &mut dyn Prompt) -> Option<AcquireRequest> {
    let systems = session.catalog.systems();
    let labels: Vec<&str> = systems.iter().map(|s| s.label).collect();
    let system = systems[choose(prompt, "Select system:", &labels)?].key;

    let devices = session.catalog.devices_for(system);
    let device = devices[choose(prompt, "Select device model:", devices)?];

    let versions = session.catalog.versions_for(system, device);
    let version = versions[choose(prompt, "Select system version:", versions)?];

    let channel = select_channel(prompt)?;

    Some(AcquireRequest {
        system: system.to_string(),
        device: device.to_string(),
        version: version.to_string(),
        channel,
    })
}

/// Run the wizard and the download; true when a firmware became active
pub async fn acquire_firmware(session: &mut Session, prompt: &mut dyn Prompt) -> bool {
    let request = match collect_request(session, prompt) {
        Some(request) => request,
        None => {
            log_info!(MODULE, "Firmware wizard abandoned");
            return false;
        }
    };

    log_info!(
        MODULE,
        "Wizard request: {} / {} / {} / {}",
        request.system,
        request.device,
        request.version,
        request.channel.name()
    );
    perform_download(session, prompt, &request).await
}
