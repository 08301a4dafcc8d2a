//! Directory listing and in-memory tree construction.

mod build;
mod list;

use crate::error::TreeError;
use std::ffi::OsString;
use std::path::Path;

pub use build::{build_tree, build_tree_with};
pub use list::FsLister;

/// One child returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the entry, exactly as the filesystem reported it.
    pub name: OsString,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes (only meaningful for non-directories).
    pub size: u64,
}

impl Entry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Entry {
            name: name.into(),
            is_dir: true,
            size: 0,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Entry {
            name: name.into(),
            is_dir: false,
            size,
        }
    }
}

/// A node of the rendered directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Display name (filename component only, lossily decoded).
    pub name: String,
    /// Whether this node is a directory.
    pub is_dir: bool,
    /// Size in bytes (only meaningful for non-directories).
    pub size: u64,
    /// Children in listing order; always empty for files.
    pub children: Vec<TreeNode>,
    /// Whether this is the last sibling in its parent's listing.
    pub is_last: bool,
}

impl TreeNode {
    /// Suffix printed after the name: `" (<N>b)"`, `" (empty)"`, or nothing for directories.
    pub fn size_suffix(&self) -> String {
        if self.is_dir {
            String::new()
        } else if self.size > 0 {
            format!(" ({}b)", self.size)
        } else {
            " (empty)".to_string()
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Configuration for tree building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Whether regular files are listed alongside directories.
    pub include_files: bool,
}

/// Abstraction over directory listing so the builder can be driven without a real filesystem.
pub trait Lister {
    /// List the immediate children of `dir`. When `include_files` is false,
    /// only directories are returned.
    fn list(&self, dir: &Path, include_files: bool) -> Result<Vec<Entry>, TreeError>;
}
