/*!
 * Core tree structures for treeclip
 */

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Handle to a node stored in a [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A single filesystem entry in the scanned tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Final path segment
    pub name: String,
    /// Whether the entry is a directory (fixed at creation)
    pub is_dir: bool,
    /// Byte size from stat (files only)
    pub size: Option<u64>,
    /// Aggregate byte size over all descendants (directories only)
    pub total_size: Option<u64>,
    /// File content, present only for relevant files
    pub content: Option<String>,
    /// Whether the content was cut at the per-file byte limit
    pub trimmed: bool,
    /// Child node ids. `None` means not yet expanded; `Some(vec![])` means
    /// visited and empty.
    pub children: Option<Vec<NodeId>>,
    /// Non-owning back-reference, used only for upward size recomputation
    pub parent: Option<NodeId>,
}

impl Node {
    /// Create a bare node with no content, size or children.
    pub fn new(path: PathBuf, name: String, is_dir: bool) -> Self {
        Self {
            path,
            name,
            is_dir,
            size: None,
            total_size: None,
            content: None,
            trimmed: false,
            children: None,
            parent: None,
        }
    }
}

/// Arena-backed tree. Nodes are owned by the arena and edges are indices,
/// so the live status view can read the tree while the walker grows it.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing only `root`.
    pub fn new(root: Node) -> Self {
        Self { nodes: vec![root] }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Add a detached node to the arena.
    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Mark a directory as visited, giving it an (initially empty) child
    /// list if it has none yet.
    pub fn mark_expanded(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        if node.children.is_none() {
            node.children = Some(Vec::new());
        }
    }

    /// Attach `child` under `parent`, wiring the back-reference.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent)
            .children
            .get_or_insert_with(Vec::new)
            .push(child);
    }

    /// Sort a directory's children by path, ascending.
    pub fn sort_children(&mut self, id: NodeId) {
        if let Some(mut children) = self.nodes[id.0].children.take() {
            children.sort_by(|a, b| self.nodes[a.0].path.cmp(&self.nodes[b.0].path));
            self.nodes[id.0].children = Some(children);
        }
    }

    /// Recompute aggregate sizes from `id` up to the root.
    ///
    /// Each directory total is recomputed in full from its current children
    /// (`total_size` if set, else `size`, else 0) rather than delta-patched,
    /// so repeated calls during a level's expansion stay consistent.
    pub fn recompute_totals(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if self.nodes[node_id.0].is_dir {
                let total: u64 = self.nodes[node_id.0]
                    .children
                    .as_deref()
                    .unwrap_or(&[])
                    .iter()
                    .map(|child| {
                        let child = &self.nodes[child.0];
                        child.total_size.or(child.size).unwrap_or(0)
                    })
                    .sum();
                self.nodes[node_id.0].total_size = Some(total);
            }
            current = self.nodes[node_id.0].parent;
        }
    }
}

/// Counters for one walk. The walker is the sole writer; the status
/// reporter only reads.
#[derive(Debug, Clone, Default)]
pub struct WalkContext {
    /// Nodes fully processed (dequeued)
    pub processed: usize,
    /// Nodes skipped by the relevance filter
    pub ignored: usize,
    /// Nodes currently queued for expansion
    pub queued: usize,
}

/// Tree shared between the walker and the status reporter on one thread.
pub type SharedTree = Rc<RefCell<Tree>>;

/// Walk counters shared the same way.
pub type SharedContext = Rc<RefCell<WalkContext>>;
