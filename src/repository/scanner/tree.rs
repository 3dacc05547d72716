//! Two-level entry tree for a single catalog path
//!
//! The root is the catalog path itself; its immediate children become the
//! sub-items. Grandchildren only contribute to their parent's totals.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::error::ScanError;
use crate::model::Entry;

use super::dir_stats::{self, DirStats};

/// Build the root entry for one catalog path.
///
/// Fails with `ScanError::PathUnavailable` when the path cannot be stat'ed.
/// A root whose final size is zero is returned as-is; dropping it is the
/// caller's job.
pub fn build_root(path: &Path, description: &str) -> Result<Entry, ScanError> {
    let meta = fs::metadata(path).map_err(|e| ScanError::unavailable(path, e))?;
    let mut root = Entry::new(path, modified_or_epoch(&meta));
    root.description = Some(description.to_string());

    let listing = match fs::read_dir(path) {
        Ok(listing) => listing,
        Err(err) => {
            // Not listable (a plain file, or no permission): measure it as one opaque item
            debug!(path = %path.display(), error = %err, "treating path as opaque leaf");
            apply_stats(&mut root, &dir_stats::collect(path));
            return Ok(root);
        }
    };

    let mut children: Vec<Entry> = listing
        .filter_map(|de| de.ok())
        .filter_map(|de| build_child(&de.path()))
        .filter(|child| child.size > 0)
        .collect();

    children.sort_by(|a, b| b.size.cmp(&a.size));

    if let Some(first) = children.first() {
        root.newest_mod_time = first.newest_mod_time;
        root.oldest_mod_time = first.oldest_mod_time;
    }
    for child in &children {
        root.size += child.size;
        root.file_count += child.file_count;
        root.skipped += child.skipped;
        root.newest_mod_time = root.newest_mod_time.max(child.newest_mod_time);
        root.oldest_mod_time = root.oldest_mod_time.min(child.oldest_mod_time);
    }

    // A lone child is not worth an expansion level
    if children.len() > 1 {
        root.is_category = true;
        root.children = children;
    }

    Ok(root)
}

/// Measure one immediate child. A symlink is a leaf sized by the link itself.
fn build_child(path: &Path) -> Option<Entry> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping child");
            return None;
        }
    };

    let mut child = Entry::new(path, modified_or_epoch(&meta));
    if meta.is_dir() {
        apply_stats(&mut child, &dir_stats::collect(path));
    } else {
        child.size = meta.len();
        child.file_count = 1;
    }
    Some(child)
}

fn apply_stats(entry: &mut Entry, stats: &DirStats) {
    entry.size = stats.size;
    entry.file_count = stats.file_count;
    entry.skipped = stats.skipped;
    if let Some(newest) = stats.newest {
        entry.newest_mod_time = entry.newest_mod_time.max(newest);
    }
    if let Some(oldest) = stats.oldest {
        entry.oldest_mod_time = entry.oldest_mod_time.min(oldest);
    }
}

fn modified_or_epoch(meta: &fs::Metadata) -> SystemTime {
    meta.modified().unwrap_or(SystemTime::UNIX_EPOCH)
}
