//! Tree rendering with box-drawing connectors.

use crate::error::TreeError;
use crate::tree::TreeNode;
use std::io::Write;

const MID_CONNECTOR: &str = "\u{251c}"; // ├
const LAST_CONNECTOR: &str = "\u{2514}"; // └
const BRANCH: &str = "\u{2500}\u{2500}\u{2500}"; // ───
const CONTINUATION: &str = "\u{2502}\t"; // │ + tab
const BLANK: &str = "\t";

/// Write one line per node in pre-order, each prefixed by `prefix`.
///
/// Stops at the first failed write.
pub fn draw_tree<W: Write + ?Sized>(
    writer: &mut W,
    nodes: &[TreeNode],
    prefix: &str,
) -> Result<(), TreeError> {
    for node in nodes {
        let line = format_line(node, prefix);
        writer
            .write_all(line.as_bytes())
            .map_err(TreeError::Write)?;

        if !node.children.is_empty() {
            draw_tree(writer, &node.children, &child_prefix(prefix, node.is_last))?;
        }
    }
    Ok(())
}

/// Format a single node's line, including the trailing newline.
pub fn format_line(node: &TreeNode, prefix: &str) -> String {
    let connector = if node.is_last {
        LAST_CONNECTOR
    } else {
        MID_CONNECTOR
    };
    format!(
        "{prefix}{connector}{BRANCH}{}{}\n",
        node.name,
        node.size_suffix()
    )
}

/// Prefix for the children of a node that was drawn with `prefix`.
fn child_prefix(prefix: &str, parent_is_last: bool) -> String {
    let extension = if parent_is_last { BLANK } else { CONTINUATION };
    format!("{prefix}{extension}")
}
