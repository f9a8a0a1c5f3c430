//! Shared test utilities for the lsjson-site test suite.
//!
//! Manifest entry constructors that mirror what `rclone lsjson` emits: the
//! entry name is always the final path component, directories report no
//! meaningful size.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tree = group_by_parent(vec![dir("docs"), file("docs/readme.txt", 10)]);
//! assert_eq!(tree.len(), 2);
//! ```

use crate::manifest::FileEntry;

fn entry(path: &str, size: i64, is_dir: bool) -> FileEntry {
    let name = path.rsplit('/').next().unwrap().to_string();
    FileEntry {
        path: path.to_string(),
        name,
        size,
        is_dir,
    }
}

/// A file entry with the given byte size.
pub fn file(path: &str, size: i64) -> FileEntry {
    entry(path, size, false)
}

/// A directory entry with the usual `-1` size.
pub fn dir(path: &str) -> FileEntry {
    entry(path, -1, true)
}

/// A directory entry whose manifest reports a real size, as some rclone
/// backends do.
pub fn dir_with_size(path: &str, size: i64) -> FileEntry {
    entry(path, size, true)
}
