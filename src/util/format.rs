use std::time::{Duration, SystemTime};

use time::macros::format_description;
use time::OffsetDateTime;

/// Format a byte count as a human-readable string (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a modification time as a short `Mon DD` date (UTC)
pub fn format_mod_date(time: SystemTime) -> String {
    if time == SystemTime::UNIX_EPOCH {
        return "unknown".to_string();
    }

    let format = format_description!("[month repr:short] [day]");
    OffsetDateTime::from(time)
        .format(&format)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Format a scan duration, e.g. `850ms` or `2.4s`
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
