//! Shell completion and man page generation for packaging.

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const BIN_NAME: &str = "dirtree";
const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

/// Write completions under `<out_dir>/completions` and the man page under
/// `<out_dir>/man`. Returns the paths written.
pub fn write_assets(out_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&completions_dir)?;
    fs::create_dir_all(&man_dir)?;

    let mut written = Vec::with_capacity(SHELLS.len() + 1);
    for shell in SHELLS {
        let mut cmd = Args::command();
        written.push(generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)?);
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    fs::write(&man_path, page)?;
    written.push(man_path);

    Ok(written)
}
