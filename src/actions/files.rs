//! File operation actions

use std::path::Path;

use super::quoted;
use crate::adb::StreamEnd;
use crate::config;
use crate::session::Session;
use crate::terminal::{print_error, show_header, wait_for_key, Prompt};

/// `push "<local>" "<remote>"`, or None when an entry is blank or the local file is missing
fn push_fragment(local: &str, remote: &str) -> Option<String> {
    if local.is_empty() || remote.is_empty() || !Path::new(local).exists() {
        return None;
    }
    Some(format!("push {} {}", quoted(local), quoted(remote)))
}

/// `pull "<remote>" "<local>"`, or None when an entry is blank
fn pull_fragment(remote: &str, local: &str) -> Option<String> {
    if remote.is_empty() || local.is_empty() {
        return None;
    }
    Some(format!("pull {} {}", quoted(remote), quoted(local)))
}

/// Directory to list, defaulting to /sdcard
fn list_dir(input: &str) -> &str {
    if input.is_empty() {
        config::actions::DEFAULT_LIST_DIR
    } else {
        input
    }
}

/// Print `result`, or `done` when the command printed nothing
fn report_quiet(result: &str, done: &str) {
    if result.is_empty() {
        println!("{}", done);
    } else {
        println!("{}", result);
    }
}

pub(super) async fn push(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Push file to device");
    let local = prompt.read_line("Local file path: ");
    let remote = prompt.read_line("Device destination path: ");
    match push_fragment(&local, &remote) {
        Some(fragment) => println!("{}", session.adb.run(&fragment, true).await),
        None => println!("File does not exist or path is empty!"),
    }
    wait_for_key(prompt);
}

pub(super) async fn pull(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Pull file from device");
    let remote = prompt.read_line("Device file path: ");
    let local = prompt.read_line("Local destination path: ");
    match pull_fragment(&remote, &local) {
        Some(fragment) => println!("{}", session.adb.run(&fragment, true).await),
        None => println!("Path cannot be empty!"),
    }
    wait_for_key(prompt);
}

pub(super) async fn list(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Device files");
    let input = prompt.read_line(&format!(
        "Directory (default: {}): ",
        config::actions::DEFAULT_LIST_DIR
    ));
    let fragment = format!("shell ls -la {}", list_dir(&input));
    println!("{}", session.adb.run(&fragment, true).await);
    wait_for_key(prompt);
}

pub(super) async fn shell(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Entering ADB shell...");
    println!("Type 'exit' to return");
    let _ = prompt.read_line("Press Enter to start...");
    if let StreamEnd::Failed(e) = session.adb.run_interactive("shell").await {
        print_error(&format!("Failed to start shell: {}", e));
        wait_for_key(prompt);
    }
}

pub(super) async fn create_dir(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Create directory");
    let path = prompt.read_line("Directory path: ");
    if path.is_empty() {
        println!("Path cannot be empty!");
    } else {
        let result = session.adb.run(&format!("shell mkdir -p {}", path), true).await;
        report_quiet(&result, "Directory created");
    }
    wait_for_key(prompt);
}

pub(super) async fn delete(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Delete file/directory");
    let path = prompt.read_line("Path: ");
    if path.is_empty() {
        println!("Path cannot be empty!");
    } else {
        let result = session.adb.run(&format!("shell rm -rf {}", path), true).await;
        report_quiet(&result, "Deleted");
    }
    wait_for_key(prompt);
}
