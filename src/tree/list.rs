use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Entry, Lister};
use crate::error::TreeError;

/// `Lister` backed by the real filesystem.
///
/// Children come back in whatever order the operating system yields them.
/// Symbolic links are not followed; a link is listed as a non-directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl Lister for FsLister {
    fn list(&self, dir: &Path, include_files: bool) -> Result<Vec<Entry>, TreeError> {
        let meta = fs::metadata(dir).map_err(|e| TreeError::read(dir, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(dir.to_path_buf()));
        }

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut entries = Vec::new();
        for entry_result in walker {
            let entry = entry_result.map_err(|e| TreeError::from_walk(dir, e))?;
            let is_dir = entry.file_type().is_dir();

            // Skip files unless they were asked for
            if !is_dir && !include_files {
                continue;
            }

            let size = if is_dir {
                0
            } else {
                entry
                    .metadata()
                    .map_err(|e| TreeError::from_walk(dir, e))?
                    .len()
            };

            entries.push(Entry {
                name: entry.file_name().to_os_string(),
                is_dir,
                size,
            });
        }
        Ok(entries)
    }
}
