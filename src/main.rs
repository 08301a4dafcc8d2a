#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::logging;
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(logging::level_for(args.verbose, args.quiet));

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    dirtree::dir_tree(&mut writer, &args.path, &args.tree_config())?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}
