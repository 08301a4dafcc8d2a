use std::path::Path;
use tracing::debug;

use super::{FsLister, Lister, TreeConfig, TreeNode};
use crate::error::TreeError;

/// Build the tree below `root` from the real filesystem.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Vec<TreeNode>, TreeError> {
    build_tree_with(&FsLister, root, config)
}

/// Build the tree below `root`, listing each directory level with `lister`.
///
/// Fails on the first directory that cannot be listed; siblings after it are
/// not visited.
pub fn build_tree_with<L: Lister + ?Sized>(
    lister: &L,
    root: &Path,
    config: &TreeConfig,
) -> Result<Vec<TreeNode>, TreeError> {
    let entries = lister.list(root, config.include_files)?;
    debug!(dir = %root.display(), count = entries.len(), "listed directory");

    let last_index = entries.len().saturating_sub(1);
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        debug_assert!(
            entry.is_dir || config.include_files,
            "lister returned a file for a directories-only listing"
        );

        let children = if entry.is_dir {
            build_tree_with(lister, &root.join(&entry.name), config)?
        } else {
            Vec::new()
        };

        nodes.push(TreeNode {
            name: entry.name.to_string_lossy().into_owned(),
            is_dir: entry.is_dir,
            size: entry.size,
            children,
            is_last: index == last_index,
        });
    }

    Ok(nodes)
}
