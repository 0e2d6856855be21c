//! System information actions

use super::non_empty_lines;
use crate::config;
use crate::session::Session;
use crate::terminal::{show_header, wait_for_key, Prompt};

pub(super) async fn props(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "System properties");
    let result = session.adb.run("shell getprop", true).await;

    let total = result.lines().count();
    for line in non_empty_lines(&result).take(config::actions::PROP_PREVIEW) {
        println!("{}", line);
    }
    if total > config::actions::PROP_PREVIEW {
        println!("... (more not shown)");
    }
    wait_for_key(prompt);
}

pub(super) async fn screen(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Screen info");
    let size = session.adb.run("shell wm size", true).await;
    let density = session.adb.run("shell wm density", true).await;
    println!("Screen size: {}", size);
    println!("Screen density: {}", density);
    wait_for_key(prompt);
}
