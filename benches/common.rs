// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use dustpan::model::Entry;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Generate `num_roots` roots; every third is a category with `children` children
pub fn generate_roots(num_roots: usize, children: usize) -> Vec<Entry> {
    (0..num_roots)
        .map(|i| {
            let path = PathBuf::from(format!("/bench/cache_{i}"));
            let mut root = Entry::new(&path, SystemTime::UNIX_EPOCH);
            root.description = Some(format!("Bench Cache {i}"));

            if i % 3 == 0 {
                root.children = (0..children)
                    .map(|c| {
                        let mut child = Entry::new(&path.join(format!("pkg_{c}")), SystemTime::UNIX_EPOCH);
                        child.size = ((children - c) * 1024) as u64;
                        child.file_count = 4;
                        child
                    })
                    .collect();
                root.is_category = true;
                root.expanded = true;
                root.size = root.children.iter().map(|c| c.size).sum();
                root.file_count = root.children.iter().map(|c| c.file_count).sum();
            } else {
                root.size = (i * 4096) as u64;
                root.file_count = 1;
            }
            root
        })
        .collect()
}

/// Populate a directory tree of `dirs` subdirectories with `files` small files each
pub fn create_cache_dir(dirs: usize, files: usize) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("cache");
    for d in 0..dirs {
        let sub = base.join(format!("dir_{d}"));
        fs::create_dir_all(&sub).unwrap();
        for f in 0..files {
            write_file(&sub.join(format!("file_{f}.bin")), 512);
        }
    }
    (dir, base)
}

fn write_file(path: &Path, len: u64) {
    File::create(path).unwrap().set_len(len).unwrap();
}
