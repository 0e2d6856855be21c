//! Size and text formatting
//!
//! Sizes use binary units throughout: a "MB" here is a MiB.

/// Bytes in one MiB
pub const MB: u64 = 1024 * 1024;
/// Bytes in one GiB
pub const GB: u64 = 1024 * MB;

/// Byte count as fractional MiB
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MB as f64
}

/// Byte count as fractional GiB
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GB as f64
}

/// Format a firmware size the way summaries show it (e.g., "2.64 GB")
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes_to_gb(bytes))
}

/// Size in the largest unit that fits ("512 B", "3 MB", "1.5 GB")
///
/// Firmware summaries use [`format_gb`] instead, which never changes unit.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [(&str, u64, usize); 4] = [
        ("TB", GB * 1024, 1),
        ("GB", GB, 1),
        ("MB", MB, 0),
        ("KB", 1024, 0),
    ];

    for (name, unit, decimals) in UNITS {
        if bytes >= unit {
            return format!("{:.*} {}", decimals, bytes as f64 / unit as f64, name);
        }
    }
    format!("{} B", bytes)
}

/// Cut `text` to at most `max_chars` characters, appending "..." when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Convert a 1-based menu entry into a 0-based index below `len`
pub fn parse_index(input: &str, len: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1", 2), Some(0));
        assert_eq!(parse_index(" 2 ", 2), Some(1));
        assert_eq!(parse_index("0", 2), None);
        assert_eq!(parse_index("3", 2), None);
        assert_eq!(parse_index("x", 2), None);
        assert_eq!(parse_index("1", 0), None);
    }

    #[test]
    fn test_format_size_picks_unit() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(3 * MB), "3 MB");
        assert_eq!(format_size(GB + GB / 2), "1.5 GB");
        assert_eq!(format_size(2048 * GB), "2.0 TB");
    }

    #[test]
    fn test_format_gb() {
        assert_eq!(format_gb(0), "0.00 GB");
        assert_eq!(format_gb(2700 * MB), "2.64 GB");
        assert_eq!(format_gb(4 * GB), "4.00 GB");
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(bytes_to_mb(10 * MB), 10.0);
        assert_eq!(bytes_to_gb(GB / 4), 0.25);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("设备信息", 2), "设备...");
    }
}
