use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the catalog or scanning one of its paths
#[derive(Debug, Error)]
pub enum ScanError {
    /// The home directory could not be resolved, so there is no catalog to scan
    #[error("could not determine home directory")]
    Configuration,

    /// A catalog path is missing or unreadable; callers skip it
    #[error("{}: {source}", .path.display())]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PathUnavailable { path: path.into(), source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathUnavailable { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// A cleanup target could not be removed; the batch stopped at `path`
#[derive(Debug, Error)]
#[error("{}: {source} ({removed} removed before failure)", .path.display())]
pub struct CleanupError {
    pub path: PathBuf,
    /// Targets already removed before the failure; those removals stand
    pub removed: usize,
    #[source]
    pub source: anyhow::Error,
}
