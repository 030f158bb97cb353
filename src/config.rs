/*!
 * Configuration handling for treeclip
 */

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Default per-file content cut-off, in bytes.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 8192;

/// Artificial pause before each node load, so the live view visibly
/// animates on small trees. First thing to zero out when throughput
/// matters; tests run with `Duration::ZERO`.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(10);

/// Command-line arguments for treeclip
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treeclip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a directory tree and its file contents to the clipboard as an LLM prompt"
)]
pub struct Args {
    /// Directory to serialize
    #[clap(default_value = ".")]
    pub directory: String,

    /// Maximum number of content bytes to keep per file
    #[clap(long, default_value_t = DEFAULT_MAX_FILE_BYTES)]
    pub max_file_bytes: u64,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to serialize
    pub target_dir: PathBuf,

    /// Per-file content byte limit
    pub max_file_bytes: u64,

    /// Pause injected before each node load
    pub load_delay: Duration,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory),
            max_file_bytes: args.max_file_bytes,
            load_delay: DEFAULT_LOAD_DELAY,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> io::Result<()> {
        if !self.target_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Target directory not found: {}", self.target_dir.display()),
            ));
        }
        Ok(())
    }
}
