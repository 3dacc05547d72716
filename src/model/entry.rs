use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One reclaimable item: a catalog root or one of its immediate children
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub file_count: u64,
    pub newest_mod_time: SystemTime,
    pub oldest_mod_time: SystemTime,
    #[serde(skip)]
    pub selected: bool,
    #[serde(skip)]
    pub expanded: bool,
    pub is_category: bool,
    /// Descendants left out of `size` because they could not be read
    pub skipped: u64,
    /// Sorted by size descending; empty unless `is_category`
    pub children: Vec<Entry>,
    /// Catalog label, only set on roots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entry {
    /// Create an empty entry whose timestamps start at `modified`
    pub fn new(path: &Path, modified: SystemTime) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
            size: 0,
            file_count: 0,
            newest_mod_time: modified,
            oldest_mod_time: modified,
            selected: false,
            expanded: false,
            is_category: false,
            skipped: 0,
            children: Vec::new(),
            description: None,
        }
    }

    /// Case-insensitive match on name or description. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// Children that take part in selection and display
    #[inline]
    pub fn visible_children(&self) -> &[Entry] {
        if self.is_category { &self.children } else { &[] }
    }
}

/// Address of an entry inside the root list: a root, or one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    pub root: usize,
    pub child: Option<usize>,
}

impl EntryId {
    pub fn root(root: usize) -> Self {
        Self { root, child: None }
    }

    pub fn child(root: usize, child: usize) -> Self {
        Self { root, child: Some(child) }
    }

    #[inline]
    pub fn is_child(&self) -> bool {
        self.child.is_some()
    }
}
