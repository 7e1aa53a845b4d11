//! Path set value objects

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Raw, user-supplied path inputs for one run.
///
/// Sources are processed in field order: explicit paths, then the
/// directory root, then the list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSources {
    /// Paths given directly on the command line
    pub explicit: Vec<String>,
    /// Directory whose immediate regular files are included
    pub directory: Option<String>,
    /// Newline-delimited list of paths (`#` comments allowed)
    pub list_file: Option<String>,
}

impl PathSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.explicit.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_directory(mut self, dir: impl Into<String>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    pub fn with_list_file(mut self, list: impl Into<String>) -> Self {
        self.list_file = Some(list.into());
        self
    }

    /// True when no source was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty() && self.directory.is_none() && self.list_file.is_none()
    }
}

/// Outcome of path resolution. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPathSet {
    /// Absolute regular-file paths, first-seen order, no duplicates
    pub paths: Vec<PathBuf>,
    /// Normalized inputs that did not resolve to a regular file
    pub missing: Vec<PathBuf>,
}

impl ResolvedPathSet {
    pub fn builder() -> ResolvedPathSetBuilder {
        ResolvedPathSetBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Accumulates resolved files and misses, deduplicating on the way.
///
/// Both sequences keep the position of the first occurrence.
#[derive(Debug, Default)]
pub struct ResolvedPathSetBuilder {
    paths: Vec<PathBuf>,
    missing: Vec<PathBuf>,
    seen_paths: HashSet<PathBuf>,
    seen_missing: HashSet<PathBuf>,
}

impl ResolvedPathSetBuilder {
    /// Record a path known to be an existing regular file.
    pub fn push_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if self.seen_paths.insert(path.to_path_buf()) {
            self.paths.push(path.to_path_buf());
        }
    }

    /// Record an input that did not resolve.
    pub fn push_missing(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if self.seen_missing.insert(path.to_path_buf()) {
            self.missing.push(path.to_path_buf());
        }
    }

    pub fn build(self) -> ResolvedPathSet {
        ResolvedPathSet {
            paths: self.paths,
            missing: self.missing,
        }
    }
}
