// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Landing page hero block swap.
//!
//! Replaces the inline SVG hero inside `<div class="hv-main">` with a static
//! image tag. The file is always written back, matched or not.

use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::error::Result;
use crate::reader::FileReader;
use crate::writer::write_atomic;

/// File rewritten when no path is given, relative to the working directory.
pub const DEFAULT_HERO_FILE: &str = "public/index.html";

/// From the hero opening tag, lazily across lines, to the first `</svg>`
/// followed by the closing `</div>`.
pub const HERO_PATTERN: &str = r#"(?s)<div class="hv-main">.*?</svg>\s*</div>"#;

/// Inserted verbatim in place of the hero block.
pub const HERO_REPLACEMENT: &str = r#"<div class="hv-main"><img src="hero-image.png" alt="Healthcare professional using holographic medical display" style="width: 100%; height: auto; border-radius: 22px; box-shadow: 0 24px 60px rgba(0, 0, 0, .5);" /></div>"#;

/// Printed after the file is written, whether or not a block matched.
pub const SUCCESS_MESSAGE: &str = "Hero image replaced successfully!";

#[allow(clippy::expect_used)]
static HERO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HERO_PATTERN).expect("valid regex"));

/// Result of the hero swap on one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRewrite {
    pub content: String,
    /// Whether a hero block was found.
    pub replaced: bool,
}

/// Replace the first hero block in `text`.
pub fn replace_hero_block(text: &str) -> HeroRewrite {
    let replaced = HERO_RE.is_match(text);
    let content = HERO_RE
        .replacen(text, 1, NoExpand(HERO_REPLACEMENT))
        .into_owned();
    HeroRewrite { content, replaced }
}

/// Swap the hero block in the file at `path` and write it back.
///
/// Read and write failures are returned. A file without a hero block is
/// still rewritten, unchanged.
pub fn replace_hero_file(path: &Path, reader: &FileReader) -> Result<bool> {
    let text = reader.read_text(path)?;
    let rewrite = replace_hero_block(&text);

    if !rewrite.replaced {
        tracing::warn!("no hero block found in {}", path.display());
    }

    write_atomic(path, &rewrite.content)?;
    Ok(rewrite.replaced)
}

#[cfg(test)]
#[path = "hero_tests.rs"]
mod tests;
