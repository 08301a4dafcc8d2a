#![forbid(unsafe_code)]

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    for path in dirtree::assets::write_assets(&out_dir)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
