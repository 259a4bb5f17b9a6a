// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-run summaries for `--verbose`.
//!
//! Writes `[verbose]` prefixed lines to stderr so stdout keeps the plain
//! tool output.

use std::fmt::Display;

/// Stderr summary writer. Silent unless `--verbose` was given.
pub struct VerboseLogger {
    enabled: bool,
}

/// One `name: value` summary line.
fn format_field(name: &str, value: impl Display) -> String {
    format!("{}: {}", name, value)
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Print a `name: value` line, such as a count or a path.
    pub fn field(&self, name: &str, value: impl Display) {
        if self.enabled {
            self.log(&format_field(name, value));
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
