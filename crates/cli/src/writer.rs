// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file rewrites.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to the file name for the staging copy.
const TEMP_SUFFIX: &str = ".reword.tmp";

/// Staging path next to `path`, so the final rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// The file a write to `path` should land in.
///
/// A symlink resolves to its target so the rename replaces the target and
/// the link survives.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            std::fs::canonicalize(path).map_err(|e| Error::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Replace the contents of `path` with `contents`.
///
/// Writes to a temp file and renames it over the target. The target's
/// permissions are carried over when it already exists. Symlinks are
/// written through.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = resolve_target(path)?;
    let path = target.as_path();
    let temp_path = temp_path_for(path);
    let permissions = std::fs::metadata(path).ok().map(|m| m.permissions());

    std::fs::write(&temp_path, contents).map_err(|e| Error::io(&temp_path, e))?;

    if let Some(permissions) = permissions
        && let Err(e) = std::fs::set_permissions(&temp_path, permissions)
    {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
