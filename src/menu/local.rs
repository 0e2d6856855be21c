//! Local firmware picker

use std::path::{Path, PathBuf};

use console::style;

use crate::firmware::{analyze, content_sha256, scan, FirmwareDescriptor};
use crate::session::Session;
use crate::terminal::{print_error, print_success, show_header, wait_for_key, Key, Prompt};
use crate::utils::{format_gb, parse_index};
use crate::{log_info, log_warn};

const MODULE: &str = "menu::local";

/// Resolve picker input to a file: a list number or a path to an existing file
pub fn resolve_selection(input: &str, files: &[PathBuf]) -> Option<PathBuf> {
    if let Some(index) = parse_index(input, files.len()) {
        return Some(files[index].clone());
    }
    let path = Path::new(input);
    if !input.is_empty() && path.is_file() {
        return Some(path.to_path_buf());
    }
    None
}

fn print_listing(files: &[PathBuf]) {
    println!("\nAvailable firmware files:");
    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let size = std::fs::metadata(file).map(|m| m.len()).unwrap_or(0);
        let parent = file
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!("{}. {} ({}) - {}", i + 1, name, format_gb(size), parent);
    }
}

fn print_summary(firmware: &FirmwareDescriptor) {
    print_success(&format!("\nSelected firmware: {}", firmware.name));
    println!("System: {}", firmware.system.to_uppercase());
    println!("Device: {}", firmware.device);
    println!("File size: {}", firmware.size_label());
    println!("Modified: {}", firmware.build_date);
    println!(
        "Placeholder fingerprint: {} {}",
        firmware.fingerprint,
        style("(path + size, not a content hash)").dim()
    );
}

async fn verify_content(path: PathBuf) {
    println!("\nComputing SHA-256...");
    let result = tokio::task::spawn_blocking(move || content_sha256(&path))
        .await
        .map_err(|e| format!("Hash task failed: {}", e))
        .and_then(|r| r);

    match result {
        Ok(hash) => println!("SHA-256: {}", hash),
        Err(e) => {
            log_warn!(MODULE, "Content hash failed: {}", e);
            print_error(&e);
        }
    }
}

/// Pick a local firmware file and make it active; true on success
pub async fn select_local_firmware(session: &mut Session, prompt: &mut dyn Prompt) -> bool {
    show_header(prompt, "Local firmware selection:");
    println!("Supported formats: .zip / .img / .bin / .tgz");

    let root = session.firmware_root.clone();
    if !root.is_dir() {
        print_error(&format!(
            "\nFirmware directory {} does not exist. Acquire a firmware first.",
            root.display()
        ));
        wait_for_key(prompt);
        return false;
    }

    let files = scan(&root);
    if files.is_empty() {
        print_error(&format!("\nNo firmware files found under {}", root.display()));
        wait_for_key(prompt);
        return false;
    }

    print_listing(&files);
    println!("\nEnter a file number or a full file path (blank to cancel).");

    let path = loop {
        let input = prompt.read_line("Selection: ");
        if input.is_empty() {
            log_info!(MODULE, "Local selection cancelled");
            return false;
        }
        match resolve_selection(&input, &files) {
            Some(path) => break path,
            None => print_error("Invalid selection! Try again."),
        }
    };

    let firmware = match analyze(&path, &root) {
        Ok(firmware) => firmware,
        Err(e) => {
            print_error(&e);
            wait_for_key(prompt);
            return false;
        }
    };

    print_summary(&firmware);
    println!("\nPress V to verify the SHA-256 content hash, any other key to continue");
    if matches!(prompt.read_key(), Key::Char('v') | Key::Char('V')) {
        verify_content(firmware.path.clone()).await;
        wait_for_key(prompt);
    }

    session.set_firmware(firmware);
    true
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adb::AdbClient;
    use crate::firmware::FirmwareSource;
    use crate::terminal::testing::ScriptedPrompt;
    use crate::utils::Pacing;

    fn session(root: &Path) -> Session {
        Session::new(
            AdbClient::new("adb", Duration::from_secs(1)),
            root.to_path_buf(),
            Pacing::instant(),
        )
    }

    fn layout() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        let device = root.join("xiaomi").join("Xiaomi_14");
        std::fs::create_dir_all(&device).unwrap();
        std::fs::write(device.join("rom.zip"), b"zip").unwrap();
        std::fs::write(device.join("boot.img"), b"img").unwrap();
        (dir, root)
    }

    #[test]
    fn test_resolve_selection() {
        let (_dir, root) = layout();
        let files = scan(&root);

        assert_eq!(resolve_selection("1", &files), Some(files[0].clone()));
        assert_eq!(resolve_selection("3", &files), None);
        assert_eq!(resolve_selection("0", &files), None);
        let typed = files[1].display().to_string();
        assert_eq!(resolve_selection(&typed, &files), Some(files[1].clone()));
        assert_eq!(resolve_selection("/no/such/file.zip", &files), None);
    }

    #[tokio::test]
    async fn test_select_by_number() {
        let (_dir, root) = layout();
        let mut session = session(&root);
        // zip files are listed first
        let mut prompt = ScriptedPrompt::chars("n", &["abc", "1"]);

        assert!(select_local_firmware(&mut session, &mut prompt).await);
        let fw = session.firmware.unwrap();
        assert_eq!(fw.name, "rom.zip");
        assert_eq!(fw.system, "xiaomi");
        assert_eq!(fw.device, "Xiaomi 14");
        assert_eq!(fw.source, FirmwareSource::Local);
    }

    #[tokio::test]
    async fn test_verify_then_select() {
        let (_dir, root) = layout();
        let mut session = session(&root);
        let mut prompt = ScriptedPrompt::chars("vx", &["2"]);

        assert!(select_local_firmware(&mut session, &mut prompt).await);
        assert_eq!(session.firmware.unwrap().name, "boot.img");
        assert!(prompt.keys.is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_cancels() {
        let (_dir, root) = layout();
        let mut session = session(&root);
        let mut prompt = ScriptedPrompt::default();

        assert!(!select_local_firmware(&mut session, &mut prompt).await);
        assert!(session.firmware.is_none());
    }

    #[tokio::test]
    async fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir.path().join("img"));
        let mut prompt = ScriptedPrompt::default();

        assert!(!select_local_firmware(&mut session, &mut prompt).await);
    }

    #[tokio::test]
    async fn test_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut prompt = ScriptedPrompt::default();

        assert!(!select_local_firmware(&mut session, &mut prompt).await);
    }
}
