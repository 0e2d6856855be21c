//! Local firmware discovery
//!
//! Recursive scan of the firmware root and descriptor extraction from the
//! `<root>/<system>/<device>/<file>` layout.

use std::path::{Component, Path, PathBuf};

use super::{placeholder_fingerprint, FirmwareDescriptor, FirmwareSource};
use crate::config;
use crate::utils::firmware_extension;
use crate::{log_debug, log_info, log_warn};

const MODULE: &str = "firmware::local";

/// Find firmware files under `root`, grouped by extension in scan order
///
/// A missing root yields an empty list.
pub fn scan(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files(root, &mut files);

    let mut found = Vec::new();
    for ext in config::firmware::EXTENSIONS {
        let mut group: Vec<PathBuf> = files
            .iter()
            .filter(|path| firmware_extension(path) == Some(*ext))
            .cloned()
            .collect();
        group.sort();
        found.extend(group);
    }

    log_info!(
        MODULE,
        "Found {} firmware file(s) under {}",
        found.len(),
        root.display()
    );
    found
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log_debug!(MODULE, "Cannot read {}: {}", dir.display(), e);
            return;
        }
    };

    // Symlinked directories are not followed; a link back up the tree
    // would recurse forever
    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            collect_files(&path, files);
        } else if path.is_file() {
            files.push(path);
        }
    }
}

/// Build a descriptor for a local file
///
/// System and device are read from the two path components following the
/// firmware root's directory name; device underscores become spaces.
pub fn analyze(path: &Path, root: &Path) -> Result<FirmwareDescriptor, String> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        log_warn!(MODULE, "Failed to read file info for {}: {}", path.display(), e);
        format!("Failed to read file info: {}", e)
    })?;

    let root_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(config::firmware::ROOT_DIR);

    let parts: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let mut system = "unknown".to_string();
    let mut device = "Unknown device".to_string();
    if let Some(index) = parts.iter().position(|p| *p == root_name) {
        // Only directories count: the file itself is never a system or device
        let dirs = &parts[..parts.len().saturating_sub(1)];
        if let Some(s) = dirs.get(index + 1) {
            system = s.to_string();
        }
        if let Some(d) = dirs.get(index + 2) {
            device = d.replace('_', " ");
        }
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let modified = metadata
        .modified()
        .map(|t| {
            chrono::DateTime::<chrono::Local>::from(t)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_default();

    log_info!(
        MODULE,
        "Analyzed local firmware: {} (system: {}, device: {}, {} bytes)",
        name,
        system,
        device,
        metadata.len()
    );

    Ok(FirmwareDescriptor {
        name,
        system,
        device,
        version: None,
        channel: None,
        size_bytes: metadata.len(),
        fingerprint: placeholder_fingerprint(path),
        source: FirmwareSource::Local,
        path: path.to_path_buf(),
        build_date: modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"fw").unwrap();
    }

    #[test]
    fn test_scan_groups_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        touch(&root.join("pixel/Pixel8/b.img"));
        touch(&root.join("pixel/Pixel8/a.zip"));
        touch(&root.join("xiaomi/Xiaomi14/c.tgz"));
        touch(&root.join("xiaomi/notes.txt"));
        touch(&root.join("x.bin"));

        let names: Vec<String> = scan(&root)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.zip", "b.img", "x.bin", "c.tgz"]);
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan(&dir.path().join("img")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_directory_symlink_loop() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        touch(&root.join("pixel/a.zip"));
        std::os::unix::fs::symlink(&root, root.join("pixel").join("loop")).unwrap();

        assert_eq!(scan(&root), vec![root.join("pixel").join("a.zip")]);
    }

    #[test]
    fn test_analyze_reads_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        let path = root.join("pixel").join("Pixel_8_Pro").join("husky.zip");
        touch(&path);

        let fw = analyze(&path, &root).unwrap();
        assert_eq!(fw.name, "husky.zip");
        assert_eq!(fw.system, "pixel");
        assert_eq!(fw.device, "Pixel 8 Pro");
        assert_eq!(fw.size_bytes, 2);
        assert_eq!(fw.source, FirmwareSource::Local);
        assert_eq!(fw.fingerprint, placeholder_fingerprint(&path));
    }

    #[test]
    fn test_analyze_outside_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loose.bin");
        touch(&path);

        let fw = analyze(&path, Path::new("img")).unwrap();
        assert_eq!(fw.system, "unknown");
        assert_eq!(fw.device, "Unknown device");
    }

    #[test]
    fn test_analyze_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(analyze(&dir.path().join("gone.zip"), Path::new("img")).is_err());
    }
}
