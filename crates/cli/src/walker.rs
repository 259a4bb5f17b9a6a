// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential file walking for the rename pass.
//!
//! Uses the `ignore` crate's walker with its standard filters turned off:
//! hidden files are visited and `.gitignore` is not consulted. Symlinks are
//! followed; loops are reported as walk errors. Dependency, build-output and
//! VCS directories are pruned during traversal.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ignore::WalkBuilder;

/// Directory name fragments that prune a subtree.
///
/// Matched as substrings of the directory name, so `.github` is pruned
/// along with `.git`.
pub const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".next", ".git"];

/// File name suffixes eligible for rewriting. Case-sensitive.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".json", ".md"];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: unlimited).
    pub max_depth: Option<usize>,

    /// Directory name fragments to prune.
    pub skip_directories: Vec<String>,

    /// File name suffixes to keep.
    pub extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            skip_directories: SKIP_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
            extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Files kept by the extension filter.
    pub files_found: usize,

    /// Files skipped for their extension.
    pub files_filtered: usize,

    /// Directories pruned by name.
    pub dirs_skipped: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Sequential file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

/// Whether `name` contains any of the skip fragments.
fn is_skipped_dir_name(name: &str, skip: &[String]) -> bool {
    skip.iter().any(|fragment| name.contains(fragment.as_str()))
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Whether a file name ends with one of the allowed suffixes.
    pub fn is_allowed(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| {
                self.config
                    .extensions
                    .iter()
                    .any(|ext| name.ends_with(ext.as_str()))
            })
            .unwrap_or(false)
    }

    /// Walk `root` and collect allowed files in sorted order.
    ///
    /// Errors are logged and counted; they never stop the walk. A missing
    /// root yields no files and one error.
    pub fn walk_collect(&self, root: &Path) -> (Vec<PathBuf>, WalkStats) {
        let dirs_skipped = Arc::new(AtomicUsize::new(0));
        let skip = self.config.skip_directories.clone();
        let skipped = Arc::clone(&dirs_skipped);

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(true)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        // Prune during traversal so nothing below a skipped directory is read.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if is_skipped_dir_name(&name, &skip) {
                tracing::debug!("skipping directory {}", entry.path().display());
                skipped.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            true
        });

        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                    if !is_file {
                        continue;
                    }

                    if !self.is_allowed(entry.path()) {
                        stats.files_filtered += 1;
                        continue;
                    }

                    stats.files_found += 1;
                    files.push(entry.into_path());
                }
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                }
            }
        }

        stats.dirs_skipped = dirs_skipped.load(Ordering::Relaxed);
        tracing::info!(
            root = %root.display(),
            files = stats.files_found,
            filtered = stats.files_filtered,
            dirs_skipped = stats.dirs_skipped,
            errors = stats.errors,
            "walk complete"
        );

        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
