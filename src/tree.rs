//! Directory tree grouping.
//!
//! Stage 2 of the pipeline. The manifest is flat; pages are per-directory.
//! This module partitions the entries by parent path so the renderer can
//! emit one listing for every directory that actually has children.

use crate::manifest::FileEntry;
use std::collections::BTreeMap;
use std::path::Path;

/// Tree key for entries at the top of the listed remote (no parent segment).
pub const ROOT_KEY: &str = ".";

/// Parent path → direct children, children in manifest encounter order.
///
/// Keys are sorted, so iteration — and with it page generation and the run
/// report — is deterministic. Only computed parents become keys: a directory
/// listed as somebody's child but never parenting an entry of its own gets
/// no key and therefore no page.
pub type DirectoryTree = BTreeMap<String, Vec<FileEntry>>;

/// Parent directory of a manifest path, [`ROOT_KEY`] for top-level entries.
///
/// Standard path-parent semantics:
/// - `"docs/readme.txt"` → `"docs"`
/// - `"a/b/c"` → `"a/b"`
/// - `"readme.txt"` → `"."`
/// - `""` → `"."`
pub fn parent_key(path: &str) -> String {
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ROOT_KEY.to_string())
}

/// Group entries by parent directory.
///
/// No deduplication: a path listed twice in the manifest appears twice under
/// its parent and renders twice.
pub fn group_by_parent(entries: Vec<FileEntry>) -> DirectoryTree {
    let mut tree = DirectoryTree::new();
    for entry in entries {
        tree.entry(parent_key(&entry.path)).or_default().push(entry);
    }
    tree
}
