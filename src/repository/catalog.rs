use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Home-relative cache locations and their labels, in scan order
const STANDARD_LOCATIONS: &[(&[&str], &str)] = &[
    (&["Library", "Caches"], "System & App Caches"),
    (&["Library", "Logs"], "Log Files"),
    (&["Library", "Developer", "Xcode", "DerivedData"], "Xcode Build Data"),
    (&["Library", "Developer", "Xcode", "Archives"], "Xcode Archives"),
    (&[".npm", "_cacache"], "npm Cache"),
    (&[".cache", "yarn"], "Yarn Cache"),
    (&["Library", "Caches", "pip"], "Python pip Cache"),
    (&["Library", "Caches", "Homebrew"], "Homebrew Cache"),
    (&[".gradle", "caches"], "Gradle Cache"),
    (&[".cargo", "registry"], "Cargo Registry"),
    (&["Library", "Caches", "Google", "Chrome"], "Chrome Cache"),
    (&["Library", "Caches", "com.apple.Safari"], "Safari Cache"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub description: String,
}

/// The fixed set of locations a scan visits
#[derive(Debug, Clone, Default)]
pub struct PathCatalog {
    entries: Vec<CatalogEntry>,
}

impl PathCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Standard catalog rooted at `home`
    pub fn for_home(home: &Path) -> Self {
        let entries = STANDARD_LOCATIONS
            .iter()
            .map(|(parts, description)| CatalogEntry {
                path: parts.iter().fold(home.to_path_buf(), |p, part| p.join(part)),
                description: description.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Standard catalog rooted at the current user's home directory
    pub fn from_home_dir() -> Result<Self, ScanError> {
        let home = dirs::home_dir().ok_or(ScanError::Configuration)?;
        Ok(Self::for_home(&home))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
