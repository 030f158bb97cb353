/*!
 * Directory walking and file loading
 */

use std::collections::VecDeque;
use std::path::Path;

use tokio::fs;
use tokio::time;

use crate::config::Config;
use crate::error::Result;
use crate::filter::is_relevant;
use crate::types::{Node, SharedContext, SharedTree};

/// Walks a directory breadth-first, growing a shared tree arena as nodes
/// stream in and keeping the shared counters current.
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Walk counters, read concurrently by the status reporter
    ctx: SharedContext,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, ctx: SharedContext) -> Self {
        Self { config, ctx }
    }

    /// Stat a path and build its node.
    ///
    /// Relevant files get their content read and cut at the configured byte
    /// limit; directories and irrelevant files get a node without content.
    /// Any I/O failure is fatal to the whole run.
    pub async fn load_node(&self, path: &Path) -> Result<Node> {
        if !self.config.load_delay.is_zero() {
            time::sleep(self.config.load_delay).await;
        }

        // Link-aware stat: a symlink must not masquerade as its target.
        let meta = fs::symlink_metadata(path).await?;
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .to_string();

        let mut node = Node::new(path.to_path_buf(), name, meta.is_dir());
        if !node.is_dir {
            node.size = Some(meta.len());
            if is_relevant(&node.name) {
                let mut bytes = fs::read(path).await?;
                let limit = self.config.max_file_bytes as usize;
                if bytes.len() > limit {
                    // Byte-accurate cut; may land mid code point, which the
                    // lossy conversion below absorbs.
                    bytes.truncate(limit);
                    node.trimmed = true;
                }
                node.content = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
        }
        Ok(node)
    }

    /// Expand every reachable relevant node under the tree's root.
    ///
    /// Children are loaded strictly one at a time, and each attach runs its
    /// size repropagation before the next suspension point, so a repaint
    /// firing between steps never sees a child whose bytes are missing from
    /// an ancestor total.
    pub async fn walk(&self, tree: &SharedTree) -> Result<()> {
        let mut queue = VecDeque::new();
        queue.push_back(tree.borrow().root());

        while let Some(id) = queue.pop_front() {
            {
                let mut ctx = self.ctx.borrow_mut();
                ctx.processed += 1;
                ctx.queued = queue.len();
            }

            let (is_dir, path) = {
                let tree = tree.borrow();
                let node = tree.node(id);
                (node.is_dir, node.path.clone())
            };
            if !is_dir {
                // Traversal leaf
                continue;
            }

            let mut entries = Vec::new();
            let mut dir = fs::read_dir(&path).await?;
            while let Some(entry) = dir.next_entry().await? {
                entries.push(entry.path());
            }

            // An empty directory still ends up with an empty child list,
            // distinguishing "visited" from "not yet expanded".
            tree.borrow_mut().mark_expanded(id);

            for entry_path in entries {
                let node = self.load_node(&entry_path).await?;
                if !is_relevant(&node.name) {
                    self.ctx.borrow_mut().ignored += 1;
                    continue;
                }
                let child_is_dir = node.is_dir;
                let child = {
                    let mut tree = tree.borrow_mut();
                    let child = tree.insert(node);
                    tree.attach(id, child);
                    tree.recompute_totals(id);
                    child
                };
                if child_is_dir {
                    queue.push_back(child);
                }
            }
            tree.borrow_mut().sort_children(id);
        }
        Ok(())
    }
}
