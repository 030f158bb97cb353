/*!
 * Clipboard sink for treeclip
 *
 * The finished prompt is piped to whichever platform clipboard utility is
 * available. A missing or failing utility is fatal: the run either lands
 * the payload on the clipboard or aborts.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The utility could not be spawned or exited nonzero
    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard utility was found
    #[error("No clipboard utility found on this system")]
    NoClipboardFound,

    /// IO error while piping the payload
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Copy text to the system clipboard using the first available utility.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (cmd, args) = pick_utility().ok_or(ClipboardError::NoClipboardFound)?;
    pipe_to_command(cmd, args, text)
}

/// Check whether a command is reachable through PATH.
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH").is_some_and(|paths| {
        env::split_paths(&paths).any(|dir| dir.join(command).is_file())
    })
}

/// The preferred clipboard utility for the current environment.
fn pick_utility() -> Option<(&'static str, &'static [&'static str])> {
    // Inside tmux, the load-buffer -w path also reaches the outer clipboard.
    if env::var("TMUX").is_ok() && command_exists("tmux") {
        return Some(("tmux", &["load-buffer", "-w", "-"]));
    }

    let candidates: &'static [(&'static str, &'static [&'static str])] =
        if cfg!(target_os = "macos") {
            &[("pbcopy", &[])]
        } else if cfg!(target_os = "windows") {
            &[("clip.exe", &[])]
        } else if cfg!(target_os = "android") {
            &[("termux-clipboard-set", &[])]
        } else if env::var("WSL_DISTRO_NAME").is_ok() {
            &[("clip.exe", &[])]
        } else {
            &[
                ("wl-copy", &[]),
                ("xsel", &["-b", "-i"]),
                ("xclip", &["-selection", "clipboard", "-in"]),
            ]
        };

    candidates
        .iter()
        .copied()
        .find(|(cmd, _)| command_exists(cmd))
}

/// Spawn the utility and write the payload to its stdin.
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {cmd}: {e}")))?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("no stdin for {cmd}")))?
        .write_all(text.as_bytes())?;

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{cmd} exited with status: {status}"
        )))
    }
}
