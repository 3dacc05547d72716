//! Cache location scanner
//!
//! Walks the fixed catalog and builds the reclaimable-items tree.
//!
//! # Architecture
//!
//! - **dir_stats**: recursive size / file count / mtime summation
//! - **tree**: two-level entry tree for one catalog path
//! - **progress**: progress reporting abstraction
//! - **scanner**: orchestrator over the whole catalog

mod dir_stats;
mod progress;
mod tree;

pub use dir_stats::{collect as collect_dir_stats, DirStats};
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};
pub use tree::build_root;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::model::ScanResult;

use super::PathCatalog;

/// Scans every catalog path and collects the non-empty ones
pub struct CacheScanner {
    catalog: Arc<PathCatalog>,
}

impl CacheScanner {
    pub fn new(catalog: Arc<PathCatalog>) -> Self {
        Self { catalog }
    }

    /// Run a full scan. Paths that are missing or unreadable are skipped.
    pub fn scan(&self, progress: &dyn ProgressReporter) -> ScanResult {
        let start = Instant::now();
        let pb = progress.start("Scanning", self.catalog.len() as u64);

        let mut entries = Vec::new();
        let mut total_size = 0u64;
        let mut skipped = 0u64;

        for target in self.catalog.entries() {
            pb.advance(&target.description);

            match build_root(&target.path, &target.description) {
                Ok(entry) if entry.size > 0 => {
                    total_size += entry.size;
                    skipped += entry.skipped;
                    entries.push(entry);
                }
                Ok(_) => debug!(path = %target.path.display(), "nothing reclaimable"),
                Err(err) if err.is_not_found() => {}
                Err(err) => debug!(error = %err, "skipping catalog path"),
            }
        }

        pb.finish();

        // Catalog order is not size order
        entries.sort_by(|a, b| b.size.cmp(&a.size));

        let scan_duration = start.elapsed();
        info!(
            entries = entries.len(),
            total_size,
            skipped,
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan finished"
        );

        ScanResult {
            entries,
            total_size,
            scan_duration,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CatalogEntry;
    use std::fs;
    use tempfile::TempDir;

    fn catalog_of(paths: &[(&std::path::Path, &str)]) -> Arc<PathCatalog> {
        Arc::new(PathCatalog::new(
            paths
                .iter()
                .map(|(p, d)| CatalogEntry {
                    path: p.to_path_buf(),
                    description: d.to_string(),
                })
                .collect(),
        ))
    }

    #[test]
    fn test_roots_sorted_and_totalled() {
        let dir = TempDir::new().unwrap();
        let small = dir.path().join("small");
        let large = dir.path().join("large");
        fs::create_dir_all(&small).unwrap();
        fs::create_dir_all(&large).unwrap();
        fs::write(small.join("a"), vec![0u8; 10]).unwrap();
        fs::write(large.join("a"), vec![0u8; 90]).unwrap();

        let scanner = CacheScanner::new(catalog_of(&[(&small, "Small"), (&large, "Large")]));
        let result = scanner.scan(&NoopProgress);

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].description.as_deref(), Some("Large"));
        assert_eq!(result.total_size, 100);
    }

    #[test]
    fn test_empty_and_missing_paths_skipped() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let missing = dir.path().join("missing");

        let scanner = CacheScanner::new(catalog_of(&[(&empty, "Empty"), (&missing, "Missing")]));
        let result = scanner.scan(&NoopProgress);

        assert!(result.is_empty());
        assert_eq!(result.total_size, 0);
    }
}
