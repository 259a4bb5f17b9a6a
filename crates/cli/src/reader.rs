// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file text reading.
//!
//! Files are read whole into memory. The default reader has no size
//! limit; `with_max_size` adds one that rejects a file before it is opened.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a large file read (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Whole-file reader with an optional size cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader {
    /// Maximum file size to read, if any.
    max_size: Option<u64>,
}

impl FileReader {
    /// Create a reader that reads files of any size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader that rejects files over `max_size` bytes.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    /// Read a file as raw bytes.
    ///
    /// Returns `Err(FileTooLarge)` when a cap is set and the file exceeds it.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
        let size = metadata.len();

        if let Some(max_size) = self.max_size
            && size > max_size
        {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| Error::io(path, e))?;

        Ok(buffer)
    }

    /// Read a file as UTF-8 text.
    ///
    /// Returns `Err(Decode)` when the bytes are not valid UTF-8.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
