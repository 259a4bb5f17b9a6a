// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk rename pass over a source tree.
//!
//! Each allowed file is read whole, run through the rule set, and written
//! back only if the text changed. Read failures are reported and skipped;
//! write failures end the run.

use std::path::Path;

use crate::error::{Error, Result};
use crate::reader::FileReader;
use crate::rules::RuleSet;
use crate::walker::{FileWalker, WalkStats, WalkerConfig};
use crate::writer::write_atomic;

/// Tree rewritten when no root is given, relative to the working directory.
pub const DEFAULT_ROOT: &str = "emr-portal";

/// Line printed once the whole tree has been visited.
pub const COMPLETE_MESSAGE: &str = "Refactor complete.";

/// What happened to a single file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Updated { replacements: usize },
    /// No rule changed the content; the file was not touched.
    Unchanged,
    /// The file could not be read or decoded.
    Unreadable(Error),
}

/// Progress reported while walking.
#[derive(Debug)]
pub enum RefactorEvent<'a> {
    Updated(&'a Path),
    Unreadable { path: &'a Path, reason: String },
}

/// Totals for a tree run.
#[derive(Debug, Default)]
pub struct RefactorStats {
    pub files_scanned: usize,
    pub files_updated: usize,
    pub files_unreadable: usize,
    pub replacements: usize,
    pub walk: WalkStats,
}

/// Rule set plus the I/O policy used to apply it to files.
pub struct Refactor {
    rules: RuleSet,
    reader: FileReader,
    walker: FileWalker,
}

impl Refactor {
    pub fn new(rules: RuleSet, reader: FileReader, walker: FileWalker) -> Self {
        Self {
            rules,
            reader,
            walker,
        }
    }

    /// The client → patient pass with default reader and walker settings.
    pub fn patients() -> Result<Self> {
        Ok(Self::new(
            RuleSet::patients()?,
            FileReader::new(),
            FileWalker::new(WalkerConfig::default()),
        ))
    }

    /// Rewrite one file in place if any rule changes it.
    pub fn refactor_file(&self, path: &Path) -> Result<FileOutcome> {
        let original = match self.reader.read_text(path) {
            Ok(text) => text,
            Err(e) => return Ok(FileOutcome::Unreadable(e)),
        };

        let rewrite = self.rules.apply(&original)?;
        if rewrite.content == original {
            return Ok(FileOutcome::Unchanged);
        }

        write_atomic(path, &rewrite.content)?;
        tracing::debug!(
            path = %path.display(),
            replacements = rewrite.replacements,
            "file rewritten"
        );

        Ok(FileOutcome::Updated {
            replacements: rewrite.replacements,
        })
    }

    /// Rewrite every allowed file under `root`.
    ///
    /// `on_event` is called as each file is updated or found unreadable.
    /// The first write failure stops the walk and is returned.
    pub fn refactor_tree<F>(&self, root: &Path, mut on_event: F) -> Result<RefactorStats>
    where
        F: FnMut(RefactorEvent<'_>),
    {
        let (files, walk) = self.walker.walk_collect(root);
        let mut stats = RefactorStats {
            walk,
            ..Default::default()
        };

        for path in &files {
            stats.files_scanned += 1;
            match self.refactor_file(path)? {
                FileOutcome::Updated { replacements } => {
                    stats.files_updated += 1;
                    stats.replacements += replacements;
                    on_event(RefactorEvent::Updated(path));
                }
                FileOutcome::Unchanged => {}
                FileOutcome::Unreadable(err) => {
                    tracing::warn!("could not read {}: {}", path.display(), err);
                    stats.files_unreadable += 1;
                    on_event(RefactorEvent::Unreadable {
                        path,
                        reason: err.reason(),
                    });
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "refactor_tests.rs"]
mod tests;
