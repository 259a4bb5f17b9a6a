// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Reword error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("io error: {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("invalid utf-8: {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Pattern failed to compile or to run (bug).
    #[error("pattern error: {pattern}: {message}")]
    Pattern { pattern: String, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying cause without the path prefix.
    ///
    /// Used where the path is already printed alongside the error.
    pub fn reason(&self) -> String {
        match self {
            Error::Io { source, .. } => source.to_string(),
            Error::Decode { source, .. } => source.to_string(),
            Error::FileTooLarge { size, max_size, .. } => {
                format!("file too large ({} bytes, max: {} bytes)", size, max_size)
            }
            Error::Pattern { message, .. } => message.clone(),
        }
    }
}

/// Result type using reword Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Code 2 is left to clap for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed
    Success = 0,
    /// A file could not be read or written
    Failure = 1,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Io { .. } | Error::Decode { .. } | Error::FileTooLarge { .. } => {
                ExitCode::Failure
            }
            Error::Pattern { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
