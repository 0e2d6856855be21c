//! Acquisition module
//!
//! Simulated firmware download. No network I/O happens: the "download" is a
//! percentage animation followed by a sparse placeholder file of the
//! declared size.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use console::style;

use crate::catalog::Channel;
use crate::firmware::{placeholder_fingerprint, FirmwareDescriptor, FirmwareSource};
use crate::session::Session;
use crate::terminal::{print_error, print_success, show_header, wait_for_key, Prompt};
use crate::utils::{
    animate_percent, bytes_to_mb, firmware_path, format_gb, pause, BarColor, Pacing, MB,
};
use crate::{log_debug, log_error, log_info};

const MODULE: &str = "acquire";

/// Result of a successful [`acquire`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// A file of matching size was already on disk; nothing was written
    AlreadyPresent,
    /// A new placeholder file was written
    Created,
}

/// Channel picked in the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelChoice {
    Catalog(Channel),
    /// Custom mirror entry typed by the operator
    Custom { filename: String, size_mb: u64 },
}

impl ChannelChoice {
    pub fn name(&self) -> &'static str {
        match self {
            ChannelChoice::Catalog(channel) => channel.as_str(),
            ChannelChoice::Custom { .. } => "custom",
        }
    }
}

/// Everything the wizard collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireRequest {
    pub system: String,
    pub device: String,
    pub version: String,
    pub channel: ChannelChoice,
}

/// Whether `path` already holds a file within 1 MB of `size_mb`
pub fn matches_size(path: &Path, size_mb: u64) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => (bytes_to_mb(meta.len()) - size_mb as f64).abs() < 1.0,
        _ => false,
    }
}

/// Create a sparse file of exactly `size_mb` MiB
///
/// Seeks to the last byte and writes a single zero; the content is not
/// meaningful data.
pub fn create_placeholder_file(path: &Path, size_mb: u64) -> Result<(), String> {
    let size = size_mb
        .checked_mul(MB)
        .ok_or_else(|| format!("File size too large: {} MB", size_mb))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to create file: {}", e))?;

    if size > 0 {
        file.seek(SeekFrom::Start(size - 1))
            .map_err(|e| format!("Failed to size file: {}", e))?;
        file.write_all(&[0])
            .map_err(|e| format!("Failed to write file: {}", e))?;
    }

    log_debug!(MODULE, "Created placeholder {} ({} bytes)", path.display(), size);
    Ok(())
}

/// Simulate downloading `size_mb` MiB to `path`
///
/// Idempotent: a second call with the same arguments finds the matching
/// file and writes nothing.
pub async fn acquire(path: &Path, size_mb: u64, pacing: &Pacing) -> Result<AcquireOutcome, String> {
    if matches_size(path, size_mb) {
        log_info!(MODULE, "Using existing file: {}", path.display());
        println!("\nFile already exists, skipping download");
        return Ok(AcquireOutcome::AlreadyPresent);
    }

    log_info!(
        MODULE,
        "Simulated download: {} ({} MB)",
        path.display(),
        size_mb
    );
    println!("\nStarting download... File size: {} MB", size_mb);
    animate_percent(pacing.download_step, BarColor::Yellow).await;

    create_placeholder_file(path, size_mb).map_err(|e| {
        log_error!(MODULE, "Placeholder creation failed for {}: {}", path.display(), e);
        e
    })?;

    println!("\nDownload complete!");
    Ok(AcquireOutcome::Created)
}

/// Run the acquisition for a wizard request and make it the active firmware
///
/// Returns true when a descriptor was stored in the session.
pub async fn perform_download(
    session: &mut Session,
    prompt: &mut dyn Prompt,
    request: &AcquireRequest,
) -> bool {
    show_header(prompt, "Preparing firmware download...");
    println!("System: {}", request.system.to_uppercase());
    println!("Device: {}", request.device);
    println!("Version: {}", request.version);
    println!("Channel: {}", request.channel.name());

    let (filename, size_mb, source) = match &request.channel {
        ChannelChoice::Custom { filename, size_mb } => {
            (filename.clone(), *size_mb, FirmwareSource::CustomMirror)
        }
        ChannelChoice::Catalog(channel) => {
            match session
                .catalog
                .firmware_info(&request.system, &request.device, channel.as_str())
            {
                Some(info) => (
                    info.filename.to_string(),
                    info.size_mb,
                    FirmwareSource::OfficialMirror,
                ),
                None => {
                    log_info!(
                        MODULE,
                        "No {} firmware recorded for {} / {}",
                        channel.as_str(),
                        request.system,
                        request.device
                    );
                    print_error(&format!(
                        "Error: no {} firmware found for {}",
                        channel.as_str(),
                        request.device
                    ));
                    pause(session.pacing.linger).await;
                    return false;
                }
            }
        }
    };

    let path = firmware_path(&session.firmware_root, &request.system, &request.device, &filename);

    println!("Source: {}", source.label());
    println!("File name: {}", filename);
    println!("Save path: {}", path.display());
    println!("File size: {} MB", size_mb);

    println!("\nConnecting to mirror server...");
    pause(session.pacing.phase).await;

    if let Err(e) = acquire(&path, size_mb, &session.pacing).await {
        print_error(&format!("\nDownload failed: {}", e));
        pause(session.pacing.linger).await;
        return false;
    }

    let size_bytes = match std::fs::metadata(&path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            log_error!(MODULE, "Acquired file missing at {}: {}", path.display(), e);
            print_error("File creation failed!");
            pause(session.pacing.linger).await;
            return false;
        }
    };

    let firmware = FirmwareDescriptor {
        name: filename,
        system: request.system.clone(),
        device: request.device.clone(),
        version: Some(request.version.clone()),
        channel: Some(request.channel.name().to_string()),
        size_bytes,
        fingerprint: placeholder_fingerprint(&path),
        source,
        path: path.clone(),
        build_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    print_success(&format!("\nDownload finished: {}", firmware.name));
    println!("Device: {}", firmware.device);
    println!("Version: {}", firmware.version_label());
    println!("File size: {}", format_gb(size_bytes));
    println!(
        "Placeholder fingerprint: {} {}",
        firmware.fingerprint,
        style("(path + size, not a content hash)").dim()
    );
    println!("Saved to: {}", path.display());

    session.set_firmware(firmware);
    wait_for_key(prompt);
    true
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adb::AdbClient;
    use crate::terminal::testing::ScriptedPrompt;

    fn session(root: &Path) -> Session {
        Session::new(
            AdbClient::new("adb", Duration::from_secs(1)),
            root.to_path_buf(),
            Pacing::instant(),
        )
    }

    #[tokio::test]
    async fn test_acquire_creates_exact_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rom.zip");

        let outcome = acquire(&path, 3, &Pacing::instant()).await.unwrap();
        assert_eq!(outcome, AcquireOutcome::Created);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 3 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_acquire_second_call_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rom.zip");

        acquire(&path, 2, &Pacing::instant()).await.unwrap();
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = acquire(&path, 2, &Pacing::instant()).await.unwrap();
        assert_eq!(outcome, AcquireOutcome::AlreadyPresent);
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[tokio::test]
    async fn test_acquire_rewrites_mismatched_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rom.zip");
        std::fs::write(&path, b"tiny").unwrap();

        let outcome = acquire(&path, 2, &Pacing::instant()).await.unwrap();
        assert_eq!(outcome, AcquireOutcome::Created);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 2 * MB);
    }

    #[tokio::test]
    async fn test_acquire_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is needed
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = acquire(&blocker.join("rom.zip"), 1, &Pacing::instant()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_size_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.zip");
        create_placeholder_file(&path, 0).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert!(matches_size(&path, 0));
    }

    #[tokio::test]
    async fn test_oversized_custom_size_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.zip");

        assert!(create_placeholder_file(&path, u64::MAX / 1024).is_err());
        let result = acquire(&path, 99_999_999_999_999, &Pacing::instant()).await;
        assert!(result.unwrap_err().contains("too large"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_perform_download_custom_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut prompt = ScriptedPrompt::chars("x", &[]);
        let request = AcquireRequest {
            system: "samsung".to_string(),
            device: "Galaxy S24 Ultra".to_string(),
            version: "One UI 6.1".to_string(),
            channel: ChannelChoice::Custom {
                filename: "s24.zip".to_string(),
                size_mb: 1,
            },
        };

        assert!(perform_download(&mut session, &mut prompt, &request).await);

        let fw = session.firmware.as_ref().unwrap();
        assert_eq!(fw.name, "s24.zip");
        assert_eq!(fw.source, FirmwareSource::CustomMirror);
        assert_eq!(fw.channel.as_deref(), Some("custom"));
        assert_eq!(fw.size_bytes, MB);
        assert_eq!(
            fw.path,
            dir.path().join("samsung").join("GalaxyS24Ultra").join("s24.zip")
        );
    }

    #[tokio::test]
    async fn test_perform_download_unknown_combination() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut prompt = ScriptedPrompt::chars("", &[]);
        let request = AcquireRequest {
            system: "samsung".to_string(),
            device: "Galaxy S24".to_string(),
            version: "One UI 6.1".to_string(),
            channel: ChannelChoice::Catalog(Channel::Stable),
        };

        assert!(!perform_download(&mut session, &mut prompt, &request).await);
        assert!(session.firmware.is_none());
    }
}
