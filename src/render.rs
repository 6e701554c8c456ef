//! Output formats for a rebuilt [`Node`] tree.
//!
//! - [`to_text`]: one node per line, depth drawn with connectors
//! - [`to_dot`]: graphviz `digraph` where every node has its own id
//! - [`to_dump`]: the tree written back in dump notation
//!
//! Example of [`to_text`] for `Program(Fundecl(void,f,Block(VarDecl(INT,a),Stmt())))`:
//!
//! ```text
//! Program
//! └── Fundecl
//!     ├── void
//!     ├── f
//!     └── Block
//!         ├── VarDecl
//!         │   ├── INT
//!         │   └── a
//!         └── Stmt
//! ```

use std::path::Path;

use tracing::info;

use crate::error::{DumpError, DumpResult};
use crate::tree::Node;

pub fn to_text(root: &Node) -> String {
    let mut result = String::new();
    result.push_str(root.name());
    result.push('\n');
    append_children(&mut result, root.children(), "");
    result
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };

        result.push_str(prefix);
        result.push_str(connector);
        result.push_str(child.name());
        result.push('\n');

        let new_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        append_children(result, child.children(), &new_prefix);
    }
}

/// Graphviz export.
///
/// Ids are `n0`, `n1`, ... in pre-order, so nodes sharing a name stay
/// separate. All node statements come first, then the edges, also in
/// pre-order.
pub fn to_dot(root: &Node) -> String {
    let mut nodes = String::new();
    let mut edges = String::new();
    let mut next_id = 0;
    append_dot(root, &mut next_id, &mut nodes, &mut edges);

    format!("digraph tree {{\n{nodes}{edges}}}\n")
}

fn append_dot(node: &Node, next_id: &mut usize, nodes: &mut String, edges: &mut String) {
    let id = *next_id;
    *next_id += 1;
    nodes.push_str(&format!(
        "    n{id} [label=\"{}\"];\n",
        escape_label(node.name())
    ));

    for child in node.children() {
        edges.push_str(&format!("    n{id} -> n{};\n", *next_id));
        append_dot(child, next_id, nodes, edges);
    }
}

fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Write [`to_dot`] output to `path` in one pass.
pub fn write_dot(root: &Node, path: impl AsRef<Path>) -> DumpResult<()> {
    let path = path.as_ref();
    std::fs::write(path, to_dot(root)).map_err(|source| DumpError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), nodes = root.node_count(), "wrote graph export");
    Ok(())
}

/// Serialize a tree in dump notation. Leaves are written as bare labels.
pub fn to_dump(root: &Node) -> String {
    let mut result = String::new();
    append_dump(&mut result, root);
    result
}

fn append_dump(result: &mut String, node: &Node) {
    result.push_str(node.name());
    if node.is_leaf() {
        return;
    }

    result.push('(');
    for (i, child) in node.children().iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        append_dump(result, child);
    }
    result.push(')');
}
