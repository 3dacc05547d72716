use serde::Serialize;
use std::time::Duration;

use super::Entry;

/// Snapshot produced by one scan; superseded wholesale by the next one
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub entries: Vec<Entry>,
    pub total_size: u64,
    pub scan_duration: Duration,
    /// Unreadable descendants across all entries
    pub skipped: u64,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
