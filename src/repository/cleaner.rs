//! Permanent deletion and trash moves for selected entries

use std::any::Any;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::error::CleanupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    Permanent,
    Trash,
}

impl CleanMode {
    pub fn verb(&self) -> &'static str {
        match self {
            CleanMode::Permanent => "Clean",
            CleanMode::Trash => "Move to Trash",
        }
    }
}

/// One path to remove, with the size it was scanned at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Everything a cleanup run needs, detached from the live tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPlan {
    pub mode: CleanMode,
    pub targets: Vec<CleanupTarget>,
}

impl CleanupPlan {
    /// Bytes the plan expects to free, measured at scan time
    pub fn planned_bytes(&self) -> u64 {
        self.targets.iter().map(|t| t.size).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Scan-time size of the removed targets. An upper bound: nothing is re-measured.
    pub freed: u64,
    pub removed: usize,
}

/// The destructive primitive behind a cleanup run
pub trait PathRemover: Send + Sync {
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Removes directory trees and files for good
pub struct PermanentRemover;

impl PathRemover for PermanentRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Hands paths to the platform trash
pub struct TrashRemover;

impl PathRemover for TrashRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        // Platform trash backends can panic on their own; surface that as an error
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| trash::delete(path))) {
            Ok(result) => Ok(result?),
            Err(payload) => Err(anyhow!("trash operation panicked: {}", panic_message(payload))),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Runs a cleanup plan, stopping at the first failure.
///
/// Targets removed before a failure are not restored.
pub struct CleanupExecutor<'a> {
    remover: &'a dyn PathRemover,
}

impl<'a> CleanupExecutor<'a> {
    pub fn new(remover: &'a dyn PathRemover) -> Self {
        Self { remover }
    }

    pub fn execute(&self, plan: &CleanupPlan) -> Result<CleanupReport, CleanupError> {
        for (removed, target) in plan.targets.iter().enumerate() {
            if let Err(source) = self.remover.remove(&target.path) {
                warn!(path = %target.path.display(), error = %source, removed, "cleanup aborted");
                return Err(CleanupError {
                    path: target.path.clone(),
                    removed,
                    source,
                });
            }
        }

        let report = CleanupReport {
            freed: plan.planned_bytes(),
            removed: plan.targets.len(),
        };
        info!(mode = ?plan.mode, removed = report.removed, freed = report.freed, "cleanup finished");
        Ok(report)
    }
}

/// Run `plan` with the remover its mode calls for
pub fn run_plan(plan: &CleanupPlan) -> Result<CleanupReport, CleanupError> {
    match plan.mode {
        CleanMode::Permanent => CleanupExecutor::new(&PermanentRemover).execute(plan),
        CleanMode::Trash => CleanupExecutor::new(&TrashRemover).execute(plan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct RecordingRemover {
        fail_on: Option<PathBuf>,
        seen: Mutex<Vec<PathBuf>>,
    }

    impl PathRemover for RecordingRemover {
        fn remove(&self, path: &Path) -> Result<()> {
            self.seen.lock().unwrap().push(path.to_path_buf());
            if self.fail_on.as_deref() == Some(path) {
                return Err(anyhow!("device busy"));
            }
            Ok(())
        }
    }

    fn target(path: &str, size: u64) -> CleanupTarget {
        CleanupTarget {
            name: path.to_string(),
            path: PathBuf::from(path),
            size,
        }
    }

    #[test]
    fn test_success_reports_planned_bytes() {
        let remover = RecordingRemover { fail_on: None, seen: Mutex::new(vec![]) };
        let plan = CleanupPlan {
            mode: CleanMode::Permanent,
            targets: vec![target("/a", 10), target("/b", 32)],
        };

        let report = CleanupExecutor::new(&remover).execute(&plan).unwrap();
        assert_eq!(report, CleanupReport { freed: 42, removed: 2 });
    }

    #[test]
    fn test_first_failure_stops_batch() {
        let remover = RecordingRemover {
            fail_on: Some(PathBuf::from("/b")),
            seen: Mutex::new(vec![]),
        };
        let plan = CleanupPlan {
            mode: CleanMode::Trash,
            targets: vec![target("/a", 1), target("/b", 2), target("/c", 3)],
        };

        let err = CleanupExecutor::new(&remover).execute(&plan).unwrap_err();
        assert_eq!(err.path, PathBuf::from("/b"));
        assert_eq!(err.removed, 1);
        assert_eq!(*remover.seen.lock().unwrap(), vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_permanent_remover_handles_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(sub.join("nested")).unwrap();
        fs::write(sub.join("nested/f"), b"x").unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"y").unwrap();

        PermanentRemover.remove(&sub).unwrap();
        PermanentRemover.remove(&file).unwrap();
        assert!(!sub.exists());
        assert!(!file.exists());
        assert!(PermanentRemover.remove(&file).is_err());
    }
}
