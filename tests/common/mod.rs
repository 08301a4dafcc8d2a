#![allow(dead_code)]

use dirtree::render::draw_tree;
use dirtree::tree::{Entry, Lister, TreeNode};
use dirtree::TreeError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            write_sized(&full, 0);
        }
    }
    tmp
}

/// Create files of the given sizes (in bytes) below a fresh temp directory.
pub fn create_sized_fixture(files: &[(&str, usize)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (p, size) in files {
        write_sized(&tmp.path().join(p), *size);
    }
    tmp
}

fn write_sized(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x".repeat(size)).unwrap();
}

/// Render lines with the order normalized, for comparing against listings
/// whose order the filesystem does not guarantee.
pub fn sorted_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    lines.sort();
    lines
}

/// Render a whole tree into a `String`.
pub fn render_to_string(nodes: &[TreeNode]) -> String {
    let mut buf = Vec::new();
    draw_tree(&mut buf, nodes, "").unwrap();
    String::from_utf8(buf).unwrap()
}

/// Deterministic in-memory lister: directories map to entries in a fixed order.
#[derive(Default)]
pub struct MemLister {
    dirs: HashMap<PathBuf, Vec<Entry>>,
}

impl MemLister {
    pub fn dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
        self.dirs.insert(PathBuf::from(path), entries);
        self
    }
}

impl Lister for MemLister {
    fn list(&self, dir: &Path, include_files: bool) -> Result<Vec<Entry>, TreeError> {
        let entries = self.dirs.get(dir).ok_or_else(|| TreeError::Read {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        })?;
        Ok(entries
            .iter()
            .filter(|e| include_files || e.is_dir)
            .cloned()
            .collect())
    }
}
