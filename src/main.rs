/*!
 * Command-line interface for treeclip
 */

use std::cell::RefCell;
use std::process;
use std::rc::Rc;

use clap::Parser;
use tokio::task::LocalSet;

use treeclip::clipboard;
use treeclip::config::{Args, Config};
use treeclip::error::Result;
use treeclip::report::{StatusReporter, Ticker, REFRESH_INTERVAL};
use treeclip::scanner::Scanner;
use treeclip::types::{SharedContext, SharedTree, Tree, WalkContext};
use treeclip::writer::render_prompt;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create and validate configuration
    let config = Config::from_args(args);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    // One logical thread: the walker and the repaint loop interleave
    // cooperatively at I/O suspension points, never in parallel.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let local = LocalSet::new();
    if let Err(e) = local.block_on(&runtime, run(config)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let ctx: SharedContext = Rc::new(RefCell::new(WalkContext::default()));
    let scanner = Scanner::new(config.clone(), Rc::clone(&ctx));

    // The root is loaded unfiltered; the relevance filter only applies to
    // entries discovered during expansion.
    let root_path = tokio::fs::canonicalize(&config.target_dir).await?;
    let root_node = scanner.load_node(&root_path).await?;
    let tree: SharedTree = Rc::new(RefCell::new(Tree::new(root_node)));

    let mut ticker = Ticker::new(REFRESH_INTERVAL);
    let mut reporter = StatusReporter::new(Rc::clone(&tree), Rc::clone(&ctx));
    ticker.start(move || {
        // Repaints are cosmetic; a lost terminal must not abort the walk.
        let _ = reporter.repaint();
    });

    let walked = scanner.walk(&tree).await;
    ticker.stop();
    walked?;

    let prompt = render_prompt(&tree.borrow());
    clipboard::copy_to_clipboard(&prompt)?;
    Ok(())
}
