//! App management actions

use std::path::Path;

use super::{non_empty_lines, quoted};
use crate::config;
use crate::session::Session;
use crate::terminal::{show_header, wait_for_key, Prompt};
use crate::utils::truncate_chars;

const EMPTY_PACKAGE: &str = "Package name cannot be empty!";

/// First `limit` packages and how many more were left out
fn preview(output: &str, limit: usize) -> (Vec<&str>, usize) {
    let packages: Vec<&str> = non_empty_lines(output).collect();
    let hidden = packages.len().saturating_sub(limit);
    (packages.into_iter().take(limit).collect(), hidden)
}

/// `<command> <package>`, or None for a blank package name
fn package_fragment(command: &str, package: &str) -> Option<String> {
    let package = package.trim();
    (!package.is_empty()).then(|| format!("{} {}", command, package))
}

/// `install "<apk>"`, or None when the APK does not exist
fn install_fragment(apk_path: &str) -> Option<String> {
    let apk_path = apk_path.trim();
    if apk_path.is_empty() || !Path::new(apk_path).exists() {
        return None;
    }
    Some(format!("install {}", quoted(apk_path)))
}

pub(super) async fn list_all(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "All apps...");
    let result = session.adb.run("shell pm list packages", true).await;
    let (shown, hidden) = preview(&result, config::actions::PACKAGE_PREVIEW);
    for package in shown {
        println!("{}", package);
    }
    if hidden > 0 {
        println!("... {} more apps", hidden);
    }
    wait_for_key(prompt);
}

pub(super) async fn list_filtered(
    session: &mut Session,
    prompt: &mut dyn Prompt,
    title: &str,
    fragment: &str,
) {
    show_header(prompt, title);
    let result = session.adb.run(fragment, true).await;
    for package in non_empty_lines(&result) {
        println!("{}", package);
    }
    wait_for_key(prompt);
}

pub(super) async fn install(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "Install app");
    let apk_path = prompt.read_line("APK file path: ");
    match install_fragment(&apk_path) {
        Some(fragment) => println!("{}", session.adb.run(&fragment, true).await),
        None => println!("File does not exist!"),
    }
    wait_for_key(prompt);
}

/// Prompt for a package name and run `<command> <package>`
pub(super) async fn package_command(
    session: &mut Session,
    prompt: &mut dyn Prompt,
    title: &str,
    command: &str,
) {
    show_header(prompt, title);
    let package = prompt.read_line("Package name: ");
    match package_fragment(command, &package) {
        Some(fragment) => println!("{}", session.adb.run(&fragment, true).await),
        None => println!("{}", EMPTY_PACKAGE),
    }
    wait_for_key(prompt);
}

pub(super) async fn app_info(session: &mut Session, prompt: &mut dyn Prompt) {
    show_header(prompt, "App info");
    let package = prompt.read_line("Package name: ");
    match package_fragment("shell dumpsys package", &package) {
        Some(fragment) => {
            let result = session.adb.run(&fragment, true).await;
            println!(
                "{}",
                truncate_chars(&result, config::actions::APP_INFO_PREVIEW)
            );
        }
        None => println!("{}", EMPTY_PACKAGE),
    }
    wait_for_key(prompt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_limits_output() {
        let output: String = (0..25).map(|i| format!("package:com.app{}\n", i)).collect();
        let (shown, hidden) = preview(&output, 20);
        assert_eq!(shown.len(), 20);
        assert_eq!(shown[0], "package:com.app0");
        assert_eq!(hidden, 5);

        let (shown, hidden) = preview("package:a\n\npackage:b", 20);
        assert_eq!(shown, vec!["package:a", "package:b"]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_package_fragment() {
        assert_eq!(
            package_fragment("shell pm clear", " com.example "),
            Some("shell pm clear com.example".to_string())
        );
        assert_eq!(package_fragment("uninstall", "   "), None);
    }

    #[test]
    fn test_install_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let apk = dir.path().join("app.apk");
        std::fs::write(&apk, b"apk").unwrap();

        let apk_str = apk.to_string_lossy().to_string();
        assert_eq!(
            install_fragment(&apk_str),
            Some(format!("install \"{}\"", apk_str))
        );
        assert_eq!(install_fragment(""), None);
        assert_eq!(
            install_fragment(&dir.path().join("missing.apk").to_string_lossy()),
            None
        );
    }
}
