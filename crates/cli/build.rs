// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: configures tracing log filter.
pub const REWORD_LOG: &str = "REWORD_LOG";
/// Environment variable: root directory for `refactor-patients`.
pub const REWORD_ROOT: &str = "REWORD_ROOT";
/// Environment variable: HTML file for `replace-hero`.
pub const REWORD_HERO_FILE: &str = "REWORD_HERO_FILE";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
