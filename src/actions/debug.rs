//! Debug tool actions
//!
//! Log streaming, screen recording and the performance monitor run until
//! the operator presses Ctrl-C, then return to the menu.

use std::io::Write;
use std::time::Duration;

use crate::adb::StreamEnd;
use crate::config;
use crate::session::Session;
use crate::terminal::{banner, print_error, show_header, wait_for_key, Prompt};
use crate::utils::{format_size, unix_timestamp};
use crate::{log_info, log_warn};

use super::MODULE;

/// `shell monkey -p <package> -v <events>`, defaulting the event count
fn monkey_fragment(package: &str, events: &str) -> Option<String> {
    if package.is_empty() {
        return None;
    }
    let events = if events.is_empty() {
        config::actions::DEFAULT_MONKEY_EVENTS
    } else {
        events
    };
    Some(format!("shell monkey -p {} -v {}", package, events))
}

pub(super) async fn logcat(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Logcat");
    println!("Streaming logs, press Ctrl+C to stop...");
    if let StreamEnd::Failed(e) = session.adb.run_interactive("logcat").await {
        print_error(&format!("Failed to start logcat: {}", e));
        wait_for_key(prompt);
    }
}

pub(super) async fn clear_logcat(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Clear logs");
    let result = session.adb.run("logcat -c", true).await;
    if crate::adb::is_error(&result) {
        println!("{}", result);
    } else {
        println!("Logs cleared");
    }
    wait_for_key(prompt);
}

pub(super) async fn bug_report(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Generating bug report...");
    println!("This may take a while...");
    let result = session.adb.run("bugreport", true).await;
    if crate::adb::is_error(&result) {
        println!("{}", result);
    } else {
        println!("Bug report generated");
    }
    wait_for_key(prompt);
}

pub(super) async fn screenshot(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Screenshot");
    let filename = format!("screenshot_{}.png", unix_timestamp());
    let result = session
        .adb
        .run(&format!("exec-out screencap -p > {}", filename), true)
        .await;

    // The redirect creates the file even when adb fails, so check its content too
    let saved = std::fs::metadata(&filename)
        .map(|meta| meta.len())
        .ok()
        .filter(|len| *len > 0);
    match saved {
        Some(len) if !crate::adb::is_error(&result) => {
            log_info!(MODULE, "Screenshot saved: {} ({} bytes)", filename, len);
            println!("Screenshot saved: {} ({})", filename, format_size(len));
        }
        _ => {
            log_warn!(MODULE, "Screenshot failed: {}", result);
            println!("Screenshot failed");
        }
    }
    wait_for_key(prompt);
}

pub(super) async fn screen_record(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Screen recording");
    println!("Recording, press Ctrl+C to stop...");
    let filename = format!("record_{}.mp4", unix_timestamp());

    match session
        .adb
        .run_interactive(&format!("shell screenrecord /sdcard/{}", filename))
        .await
    {
        StreamEnd::Interrupted => {
            println!("\nRecording stopped");
            let answer = prompt.read_line("Pull the recording to this computer? (y/n): ");
            if answer.eq_ignore_ascii_case("y") {
                let result = session
                    .adb
                    .run(&format!("pull /sdcard/{} .", filename), true)
                    .await;
                if crate::adb::is_error(&result) {
                    println!("{}", result);
                } else {
                    println!("Recording saved: {}", filename);
                }
            }
        }
        StreamEnd::Exited(_) => println!("\nRecording finished: /sdcard/{}", filename),
        StreamEnd::Failed(e) => print_error(&format!("Failed to start recording: {}", e)),
    }
    wait_for_key(prompt);
}

async fn monitor_tick(session: &Session, prompt: &mut dyn Prompt, interval: Duration) {
    let cpu = session.adb.run("shell top -n 1 -b | head -20", true).await;
    let mem = session.adb.run("shell cat /proc/meminfo | head -10", true).await;

    prompt.clear();
    banner();
    println!("\nPerformance monitor (live)");
    println!("CPU usage:");
    println!("{}", cpu);
    println!("\nMemory usage:");
    println!("{}", mem);
    println!("\nPress Ctrl+C to stop monitoring...");
    let _ = std::io::stdout().flush();

    tokio::time::sleep(interval).await;
}

pub(super) async fn performance_monitor(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Performance monitor");
    println!("Monitoring, press Ctrl+C to stop...");

    let interval = Duration::from_secs(config::actions::MONITOR_INTERVAL_SECS);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                log_info!(MODULE, "Performance monitor stopped");
                break;
            }
            _ = monitor_tick(session, prompt, interval) => {}
        }
    }
}

pub(super) async fn stress_test(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Stress test");
    let package = prompt.read_line("Package name: ");
    if package.is_empty() {
        println!("Package name cannot be empty!");
    } else {
        let events = prompt.read_line(&format!(
            "Event count (default: {}): ",
            config::actions::DEFAULT_MONKEY_EVENTS
        ));
        if let Some(fragment) = monkey_fragment(&package, &events) {
            println!("{}", session.adb.run(&fragment, true).await);
        }
    }
    wait_for_key(prompt);
}
