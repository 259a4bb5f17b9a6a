// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Swap the landing page SVG hero for a static image.

use clap::Parser;

use reword::error::ExitCode;
use reword::hero::{SUCCESS_MESSAGE, replace_hero_file};
use reword::logging::init_logging;
use reword::{FileReader, HeroArgs, VerboseLogger};

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("replace-hero: {}", e);
            match e.downcast_ref::<reword::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let args = HeroArgs::parse();
    let verbose = VerboseLogger::new(args.verbose);

    let replaced = replace_hero_file(&args.file, &FileReader::new())?;

    println!("{}", SUCCESS_MESSAGE);

    verbose.section("Summary");
    verbose.field("file", args.file.display());
    verbose.log(if replaced {
        "hero block replaced"
    } else {
        "no hero block found; file written unchanged"
    });

    Ok(ExitCode::Success)
}
