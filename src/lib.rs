#![forbid(unsafe_code)]
//! dirtree — render a directory hierarchy as an indented box-drawing tree.

pub mod assets;
pub mod cli;
pub mod error;
pub mod logging;
pub mod render;
pub mod tree;

use std::io::Write;
use std::path::Path;

pub use error::TreeError;
pub use tree::{TreeConfig, TreeNode};

/// Build the tree below `root` and render it to `writer`.
///
/// The tree is built completely before anything is written, so a read error
/// produces no output.
pub fn dir_tree<W: Write + ?Sized>(
    writer: &mut W,
    root: &Path,
    config: &TreeConfig,
) -> Result<(), TreeError> {
    let nodes = tree::build_tree(root, config)?;
    tracing::info!(
        root = %root.display(),
        nodes = nodes.iter().map(TreeNode::count).sum::<usize>(),
        "tree built"
    );
    render::draw_tree(writer, &nodes, "")
}
