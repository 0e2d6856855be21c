//! ADB Flasher - ADB toolbox and simulated firmware flashing
//!
//! A terminal menu around the `adb` tool: device, app, file, system and
//! debug operations, plus a firmware acquisition wizard and a simulated
//! flash sequence.

mod acquire;
mod actions;
mod adb;
mod catalog;
mod config;
mod firmware;
mod flash;
mod logging;
mod menu;
mod session;
mod settings;
mod terminal;
mod utils;

use menu::Outcome;
use session::Session;
use settings::Settings;
use terminal::{banner, ConsolePrompt, Prompt};
use utils::pause;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging system
    logging::init();

    log_info!("main", "=== ADB Flasher Starting ===");
    log_info!("main", "Version: {}", config::app::VERSION);
    log_info!(
        "main",
        "OS: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    let settings_path = Settings::default_path();
    let settings = Settings::load_from(&settings_path);
    if settings.developer_mode {
        log_info!("main", "Developer mode enabled, setting log level to DEBUG");
        logging::set_log_level(true);
    } else {
        log_info!("main", "Developer mode disabled, using default log level");
    }
    log_info!("main", "Settings: {}", settings_path.display());
    log_info!("main", "  - adb: {}", settings.adb_path);
    log_info!("main", "  - Firmware root: {}", settings.firmware_root.display());
    log_debug!("main", "  - Command timeout: {}s", settings.command_timeout_secs);

    let mut session = Session::from_settings(&settings);
    let mut prompt = ConsolePrompt::new();

    prompt.clear();
    banner();
    println!("\nStarting...");
    pause(session.pacing.phase).await;

    match menu::run(&mut session, &mut prompt).await {
        Outcome::FirmwareReady => {
            if let Some(firmware) = session.firmware.clone() {
                flash::run_flash(
                    &mut prompt,
                    &firmware,
                    session.adb.current_device(),
                    &session.pacing,
                )
                .await;
            }
        }
        Outcome::Exit => {
            println!("\nGoodbye!");
        }
    }

    log_info!("main", "=== ADB Flasher Exiting ===");
}
