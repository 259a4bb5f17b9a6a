// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::env::names;
use crate::hero::DEFAULT_HERO_FILE;
use crate::refactor::DEFAULT_ROOT;

/// Rename "client" to "patient" across a source tree
#[derive(Parser)]
#[command(name = "refactor-patients")]
#[command(version, long_about = None)]
pub struct RefactorArgs {
    /// Root directory to rewrite
    #[arg(value_name = "ROOT", env = names::REWORD_ROOT, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Print a run summary to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Swap the landing page SVG hero for a static image
#[derive(Parser)]
#[command(name = "replace-hero")]
#[command(version, long_about = None)]
pub struct HeroArgs {
    /// HTML file to rewrite
    #[arg(value_name = "FILE", env = names::REWORD_HERO_FILE, default_value = DEFAULT_HERO_FILE)]
    pub file: PathBuf,

    /// Print a run summary to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
