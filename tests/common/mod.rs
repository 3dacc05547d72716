// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use dustpan::repository::{CatalogEntry, PathCatalog};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Create an empty temporary home directory
pub fn create_home() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let home = dir.path().to_path_buf();
    (dir, home)
}

/// Create a file of `len` bytes under `base`, creating parents as needed.
/// Uses `set_len` so large sizes stay sparse on disk.
pub fn add_file(base: &Path, rel: &str, len: u64) -> PathBuf {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(&path).unwrap();
    file.set_len(len).unwrap();
    path
}

/// Build a catalog from `(path, description)` pairs
pub fn catalog(entries: &[(PathBuf, &str)]) -> Arc<PathCatalog> {
    Arc::new(PathCatalog::new(
        entries
            .iter()
            .map(|(path, description)| CatalogEntry {
                path: path.clone(),
                description: description.to_string(),
            })
            .collect(),
    ))
}
