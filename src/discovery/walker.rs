//! Depth-bounded directory traversal producing the ordered candidate list.

use crate::discovery::filter;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Default recursion bound. A safety limit: entries below the bound are
/// simply not visited, never an error.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration for candidate discovery.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum depth below the root to traverse. The root itself is
    /// depth 0; a file directly inside it is depth 1.
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkerConfig {
    /// Set the maximum traversal depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Candidate discovery walker.
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree under `root` and return qualifying file paths.
    ///
    /// Traversal is depth-first with entries sorted by file name within
    /// each directory, so the order is stable across repeated runs on an
    /// unchanged tree. Pruned directories are never entered. An
    /// unreadable directory is logged and skipped; traversal continues
    /// with its siblings.
    pub fn discover(&self, root: &Path) -> crate::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(ManifestError::NotADirectory(root.to_path_buf()));
        }

        let mut candidates = Vec::new();
        let entries = WalkDir::new(root)
            .max_depth(self.config.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                if !entry.file_type().is_dir() {
                    return true;
                }
                filter::is_searchable_dir(&entry.file_name().to_string_lossy())
            });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            if entry.file_type().is_file()
                && filter::is_candidate_file(&entry.file_name().to_string_lossy())
            {
                candidates.push(entry.into_path());
            }
        }

        Ok(candidates)
    }
}
