/*!
 * Treeclip - Copy a directory tree and its file contents to the clipboard
 * as an LLM prompt
 *
 * This library walks a directory breadth-first, renders a visual tree
 * followed by one fenced code block per relevant file, paints live
 * progress to the terminal while walking, and places the finished payload
 * on the system clipboard.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TreeclipError};
pub use filter::is_relevant;
pub use report::{StatusReporter, Ticker};
pub use scanner::Scanner;
pub use types::{Node, NodeId, SharedContext, SharedTree, Tree, WalkContext};
pub use utils::format_file_size;
pub use writer::{render_prompt, render_tree};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
