//! Error types for tree building and rendering.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while listing a directory or writing the rendered tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{}: failed to read directory", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

impl TreeError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        TreeError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Convert a walkdir error, keeping the underlying I/O error when there is one.
    pub(crate) fn from_walk(dir: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(dir).to_path_buf();
        let source = match err.into_io_error() {
            Some(io_err) => io_err,
            None => io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        };
        TreeError::Read { path, source }
    }

    /// Whether this error came from reading the filesystem (as opposed to writing output).
    pub fn is_read(&self) -> bool {
        matches!(self, TreeError::Read { .. } | TreeError::NotADirectory(_))
    }
}
