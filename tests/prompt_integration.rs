/*!
 * Integration tests for prompt generation and the clipboard sink
 */

use std::cell::RefCell;
use std::env;
use std::fs;
use std::process::Command;
use std::rc::Rc;
use std::time::Duration;

use tempfile::tempdir;

use treeclip::clipboard::{command_exists, copy_to_clipboard};
use treeclip::config::Config;
use treeclip::types::{SharedContext, SharedTree, Tree, WalkContext};
use treeclip::writer::render_prompt;
use treeclip::Scanner;

#[tokio::test]
async fn test_full_scan_to_prompt() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    fs::write(temp_dir.path().join("docs").join("notes.md"), "# Notes\n").unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join(".git").join("HEAD"), "ref: x").unwrap();

    let config = Config {
        target_dir: temp_dir.path().to_path_buf(),
        max_file_bytes: 8192,
        load_delay: Duration::ZERO,
    };
    let ctx: SharedContext = Rc::new(RefCell::new(WalkContext::default()));
    let scanner = Scanner::new(config.clone(), Rc::clone(&ctx));
    let root = scanner.load_node(&config.target_dir).await.unwrap();
    let tree: SharedTree = Rc::new(RefCell::new(Tree::new(root)));
    scanner.walk(&tree).await.unwrap();

    let prompt = render_prompt(&tree.borrow());

    // Tree section lists both files; VCS metadata is gone.
    assert!(prompt.contains("├── docs/"));
    assert!(prompt.contains("└── main.rs (13.0B)"));
    assert!(!prompt.contains(".git"));

    // One block per file, with the right language tags and relative paths.
    assert!(prompt.contains("main.rs (13.0B)\n````rs\nfn main() {}\n````\n"));
    assert!(prompt.contains(&format!(
        "docs{}notes.md (8.0B)\n````md\n# Notes\n````\n",
        std::path::MAIN_SEPARATOR
    )));

    assert_eq!(ctx.borrow().ignored, 1);
}

#[test]
#[ignore] // Requires a running tmux session; run manually with -- --ignored
fn test_clipboard_roundtrip() {
    if env::var("TMUX").is_err() || !command_exists("tmux") {
        return;
    }

    let payload = "treeclip clipboard roundtrip";
    copy_to_clipboard(payload).expect("copy to tmux clipboard");

    let output = Command::new("tmux")
        .args(["show-buffer"])
        .output()
        .expect("tmux show-buffer");
    let content = String::from_utf8_lossy(&output.stdout);
    assert_eq!(content.trim_end(), payload);
}
