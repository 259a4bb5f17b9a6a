pub mod cli;
pub mod env;
pub mod error;
pub mod hero;
pub mod logging;
pub mod reader;
pub mod refactor;
pub mod rules;
pub mod verbose;
pub mod walker;
pub mod writer;

pub use cli::{HeroArgs, RefactorArgs};
pub use error::{Error, ExitCode, Result};
pub use hero::{HeroRewrite, replace_hero_block, replace_hero_file};
pub use reader::FileReader;
pub use refactor::{FileOutcome, Refactor, RefactorEvent, RefactorStats};
pub use rules::{Rewrite, Rule, RuleSet};
pub use verbose::VerboseLogger;
pub use walker::{FileWalker, WalkStats, WalkerConfig};
pub use writer::write_atomic;

#[cfg(test)]
pub mod test_utils;
