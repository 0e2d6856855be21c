//! Device management actions

use crate::session::Session;
use crate::terminal::{show_header, wait_for_key, Prompt};

pub(super) async fn list_devices(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Checking connected devices...");
    let devices = session.adb.list().await;
    if devices.is_empty() {
        println!("No connected devices found");
    } else {
        println!("Connected devices:");
        for device in &devices {
            println!("  - {}", device);
        }
    }
    wait_for_key(prompt);
}

pub(super) async fn select_device(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Select device");
    if let Some(current) = session.adb.current_device() {
        println!("Current device: {}", current);
    }
    if !session.adb.select(prompt).await {
        println!("No device selected");
    }
    wait_for_key(prompt);
}

pub(super) async fn device_state(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Device state...");
    let result = session.adb.run("get-state", true).await;
    println!("Device state: {}", result);
    wait_for_key(prompt);
}
