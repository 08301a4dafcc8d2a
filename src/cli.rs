use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory tree with box-drawing connectors",
    after_help = "Examples:\n  dirtree .\n  dirtree ./src -f"
)]
pub struct Args {
    /// Root directory to render
    pub path: PathBuf,

    /// Include files (with their sizes), not just directories
    #[arg(short = 'f', long = "files")]
    pub include_files: bool,

    /// Optional trailing token; only a literal `-f` includes files, anything
    /// else is accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true, conflicts_with = "include_files")]
    pub trailing: Option<OsString>,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostic output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn tree_config(&self) -> TreeConfig {
        let trailing_files = self.trailing.as_deref().is_some_and(|t| t == "-f");
        TreeConfig {
            include_files: self.include_files || trailing_files,
        }
    }
}
