//! Recursive size/count/mtime summation under one path

use std::path::Path;
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

/// Totals gathered by walking a subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirStats {
    pub size: u64,
    pub file_count: u64,
    pub newest: Option<SystemTime>,
    pub oldest: Option<SystemTime>,
    /// Descendants that could not be read and were left out of the totals
    pub skipped: u64,
}

impl DirStats {
    fn record_file(&mut self, len: u64, modified: Option<SystemTime>) {
        self.size += len;
        self.file_count += 1;
        if let Some(m) = modified {
            self.newest = Some(self.newest.map_or(m, |n| n.max(m)));
            self.oldest = Some(self.oldest.map_or(m, |o| o.min(m)));
        }
    }
}

/// Sum every regular file under `path`.
///
/// A plain file contributes itself. Unreadable descendants are counted in
/// `skipped` and the walk carries on, so a partial failure still yields a
/// usable (if smaller) total. A missing `path` yields all zeros. Symlinks,
/// `path` itself included, are never followed.
pub fn collect(path: &Path) -> DirStats {
    let mut stats = DirStats::default();

    for entry in WalkDir::new(path).follow_links(false).follow_root_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable entry");
                stats.skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => stats.record_file(meta.len(), meta.modified().ok()),
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "skipping file without metadata");
                stats.skipped += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nested_files_summed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.bin"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("a/mid.bin"), vec![0u8; 20]).unwrap();
        fs::write(dir.path().join("a/b/deep.bin"), vec![0u8; 3]).unwrap();

        let stats = collect(dir.path());
        assert_eq!(stats.size, 123);
        assert_eq!(stats.file_count, 3);
        assert!(stats.newest >= stats.oldest);
        assert!(stats.newest.is_some());
    }

    #[test]
    fn test_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blob");
        fs::write(&file, vec![1u8; 42]).unwrap();

        let stats = collect(&file);
        assert_eq!(stats.size, 42);
        assert_eq!(stats.file_count, 1);
    }

    #[test]
    fn test_empty_dir_and_zero_byte_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("zero"), b"").unwrap();

        let stats = collect(dir.path());
        assert_eq!(stats.size, 0);
        assert_eq!(stats.file_count, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_root_symlink_not_followed() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("blob"), vec![0u8; 4096]).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let stats = collect(&link);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.file_count, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_gives_partial_total() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("open")).unwrap();
        fs::create_dir_all(dir.path().join("locked")).unwrap();
        fs::write(dir.path().join("open/f"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("locked/f"), vec![0u8; 50]).unwrap();

        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits do not bind a privileged user
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let stats = collect(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(stats.size, 100);
        assert_eq!(stats.file_count, 1);
        assert!(stats.skipped > 0);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let dir = TempDir::new().unwrap();
        let stats = collect(&dir.path().join("gone"));
        assert_eq!(stats.size, 0);
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.newest, None);
    }
}
