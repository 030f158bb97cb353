/*!
 * Relevance filter: the fixed set of names excluded from every scan
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Names excluded from every scan. Exact filename equality only, no glob
/// or partial matching.
static IGNORED_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Version control
        ".git",
        ".svn",
        ".hg",
        ".gitignore",
        ".gitattributes",
        // OS metadata
        ".DS_Store",
        "Thumbs.db",
        "desktop.ini",
        // Dependencies & lockfiles
        "node_modules",
        "bower_components",
        "vendor",
        "__pycache__",
        "venv",
        ".venv",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "composer.lock",
        "Gemfile.lock",
        "poetry.lock",
        "Cargo.lock",
        // Editors
        ".idea",
        ".vscode",
        ".vs",
        ".swp",
        // Build output
        "target",
        "dist",
        "build",
        "out",
        "obj",
        "coverage",
        ".next",
        ".cache",
    ])
});

/// Whether an entry with this name should be scanned at all.
///
/// Applies to files and directories alike; an ignored directory is never
/// descended into.
pub fn is_relevant(name: &str) -> bool {
    !IGNORED_NAMES.contains(name)
}
