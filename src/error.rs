//! Global error handling for treeclip
//!
//! There are only two failure classes, and both are fatal: filesystem
//! errors during the walk, and clipboard-write errors at the end. Errors
//! propagate to `main`, get printed, and terminate the process; there is
//! no partial-success mode.

use std::io;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for treeclip operations
#[derive(Error, Debug)]
pub enum TreeclipError {
    /// Filesystem errors (stat, directory listing, file read)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard-write errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Specialized Result type for treeclip operations
pub type Result<T> = std::result::Result<T, TreeclipError>;
