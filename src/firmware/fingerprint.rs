//! Firmware fingerprints
//!
//! Two different hashes live here:
//! - [`placeholder_fingerprint`] hashes the path and the size, never the
//!   content. Stored descriptors carry it, so it is reproduced exactly, but it
//!   says nothing about integrity.
//! - [`content_sha256`] reads the whole file and is the one to trust.

use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config;
use crate::log_debug;

const MODULE: &str = "firmware::fingerprint";

/// Fingerprint reported for a missing file
pub const MISSING_FINGERPRINT: &str = "00000000000000000000000000000000";

/// MD5 hex of `"<path><size in bytes>"`, or 32 zeros when the file is missing
pub fn placeholder_fingerprint(path: &Path) -> String {
    let size = match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return MISSING_FINGERPRINT.to_string(),
    };

    let mut hasher = Md5::new();
    hasher.update(format!("{}{}", path.display(), size).as_bytes());
    hex::encode(hasher.finalize())
}

/// Calculate SHA256 of a file's content
pub fn content_sha256(path: &Path) -> Result<String, String> {
    log_debug!(MODULE, "Calculating SHA256 of: {}", path.display());

    let mut file = File::open(path).map_err(|e| format!("Failed to open file for SHA: {}", e))?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; config::firmware::HASH_BUFFER_SIZE];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|e| format!("Failed to read file for SHA: {}", e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let hash = hex::encode(hasher.finalize());
    log_debug!(MODULE, "Calculated SHA256: {}", hash);
    Ok(hash)
}
