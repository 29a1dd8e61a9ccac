//! Ordered, de-duplicated set of existing filesystem locations.

use indexmap::IndexSet;
use serde::{Serialize, Serializer};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Execution path entries in first-append order.
///
/// Every entry is absolute and lexically normalized, existed when it was
/// appended, and appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: IndexSet<PathBuf>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` unless it does not exist or is already present.
    ///
    /// Returns whether the set grew. Skips are reported on the debug stream only.
    pub fn append(&mut self, path: impl AsRef<Path>) -> bool {
        let path = normalize(path.as_ref());
        if !path.exists() {
            tracing::debug!("  X {} // does not exist", path.display());
            return false;
        }
        if self.paths.contains(&path) {
            tracing::debug!("  X {} // already added", path.display());
            return false;
        }
        tracing::debug!(" -> {}", path.display());
        self.paths.insert(path)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.contains(&normalize(path.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.paths.iter().cloned().collect()
    }

    /// Joins the entries with the platform path separator.
    pub fn join(&self) -> Result<OsString, std::env::JoinPathsError> {
        std::env::join_paths(self.paths.iter())
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a PathBuf;
    type IntoIter = indexmap::set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl Serialize for PathSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.paths.iter())
    }
}

/// Makes `path` absolute against the working directory and folds `.` and `..`
/// without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` keeps the root in place
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
