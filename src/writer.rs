/*!
 * Prompt rendering for treeclip: the ASCII tree and the fenced file blocks
 */

use std::collections::VecDeque;
use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::types::{NodeId, Tree};
use crate::utils::format_file_size;

/// Fence marker for file blocks. Four backticks, so content that uses
/// ordinary triple-backtick fences cannot close a block early. Content
/// carrying a four-backtick run of its own still breaks the framing; known
/// limitation.
pub const FENCE: &str = "````";

/// Render `node` and its descendants as an ASCII tree.
///
/// Safe to call on a partially-populated tree: an unexpanded directory
/// renders as a single leaf line. With `color` on, connectors and size
/// annotations are dimmed; names are never colorized.
pub fn render_tree(tree: &Tree, id: NodeId, color: bool) -> String {
    let mut out = String::new();
    write_node(tree, id, "", color, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, prefix: &str, color: bool, out: &mut String) {
    let node = tree.node(id);
    out.push_str(&node.name);
    if node.is_dir {
        out.push('/');
    }
    let size = node.total_size.or(node.size).unwrap_or(0);
    if size > 0 {
        let label = format!(" ({})", format_file_size(size));
        if color {
            let _ = write!(out, "{}", label.dim());
        } else {
            out.push_str(&label);
        }
    }
    out.push('\n');

    let children = match &node.children {
        Some(children) => children,
        None => return,
    };
    for (i, &child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let connector = if last { "└── " } else { "├── " };
        if color {
            let _ = write!(out, "{}{}", prefix.dim(), connector.dim());
        } else {
            out.push_str(prefix);
            out.push_str(connector);
        }
        let continuation = if last { "    " } else { "│   " };
        write_node(tree, child, &format!("{prefix}{continuation}"), color, out);
    }
}

/// Serialize the finished tree into the final prompt.
///
/// Layout: the plain (uncolored) tree, a blank line, then one fenced block
/// per file that had content, in breadth-first order. Block header is the
/// root-relative path, the file's own size and a `(trimmed)` marker when
/// the content was cut.
pub fn render_prompt(tree: &Tree) -> String {
    let root = tree.root();
    let mut out = render_tree(tree, root, false);
    out.push('\n');

    let root_path = tree.node(root).path.clone();
    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(id) = queue.pop_front() {
        let node = tree.node(id);
        if let Some(children) = &node.children {
            queue.extend(children.iter().copied());
        }
        let content = match &node.content {
            Some(content) => content,
            None => continue,
        };

        let rel_path = node.path.strip_prefix(&root_path).unwrap_or(&node.path);
        let lang = node.name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        let trimmed = if node.trimmed { " (trimmed)" } else { "" };

        let _ = writeln!(
            out,
            "{} ({}){}",
            rel_path.display(),
            format_file_size(node.size.unwrap_or(0)),
            trimmed
        );
        let _ = writeln!(out, "{FENCE}{lang}");
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
        let _ = writeln!(out, "{FENCE}");
        out.push('\n');
    }
    out
}
