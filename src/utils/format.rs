//! Formatting helpers for listing columns.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable size with binary units (`1.5 KB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// `YYYY-MM-DD HH:MM` from an RFC 3339 timestamp; other input is returned as-is.
pub fn format_modified(timestamp: &str) -> String {
    match timestamp.get(..16) {
        Some(prefix) if prefix.as_bytes().get(10) == Some(&b'T') => prefix.replacen('T', " ", 1),
        _ => timestamp.to_string(),
    }
}
