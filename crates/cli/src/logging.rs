// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt};

use crate::env::names;

/// Install a stderr subscriber filtered by `REWORD_LOG` (default: off).
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::REWORD_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
