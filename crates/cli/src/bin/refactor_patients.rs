// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rename client → patient across the portal source tree.

use clap::Parser;

use reword::error::ExitCode;
use reword::logging::init_logging;
use reword::refactor::{COMPLETE_MESSAGE, Refactor, RefactorEvent};
use reword::{RefactorArgs, VerboseLogger};

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("refactor-patients: {}", e);
            match e.downcast_ref::<reword::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let args = RefactorArgs::parse();
    let verbose = VerboseLogger::new(args.verbose);

    tracing::debug!("refactoring {}", args.root.display());
    let refactor = Refactor::patients()?;

    let stats = refactor.refactor_tree(&args.root, |event| match event {
        RefactorEvent::Updated(path) => println!("Updated: {}", path.display()),
        RefactorEvent::Unreadable { path, reason } => {
            eprintln!("Could not read {}: {}", path.display(), reason)
        }
    })?;

    println!("{}", COMPLETE_MESSAGE);

    verbose.section("Summary");
    verbose.field("root", args.root.display());
    verbose.field("files scanned", stats.files_scanned);
    verbose.field("files updated", stats.files_updated);
    verbose.field("files unreadable", stats.files_unreadable);
    verbose.field("replacements", stats.replacements);
    verbose.field("directories skipped", stats.walk.dirs_skipped);
    verbose.field("walk errors", stats.walk.errors);

    Ok(ExitCode::Success)
}
