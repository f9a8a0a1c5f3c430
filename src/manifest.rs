//! Manifest loading.
//!
//! Stage 1 of the pipeline. The manifest is the JSON document produced by
//! `rclone lsjson -R <remote>`: a flat array of objects with PascalCase
//! keys, one per file or directory.
//!
//! ```json
//! [
//!   {"Path":"docs","Name":"docs","Size":-1,"IsDir":true},
//!   {"Path":"docs/readme.txt","Name":"readme.txt","Size":1834,"IsDir":false}
//! ]
//! ```
//!
//! Loading performs no validation beyond JSON well-formedness. Entry order
//! and duplicates are preserved exactly as rclone emitted them, and keys
//! this tool has no use for (`ModTime`, `MimeType`, ...) are ignored. A
//! missing, unreadable, or syntactically invalid manifest is fatal for the
//! whole run — the caller stops before producing any output.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One manifest record. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileEntry {
    /// Slash-separated path relative to the listed remote's root.
    pub path: String,
    /// Base name (the last path segment).
    pub name: String,
    /// Byte size. rclone reports `-1` for directories, and the renderer
    /// discards the value for directories either way.
    #[serde(default = "default_size")]
    pub size: i64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

fn default_size() -> i64 {
    -1
}

/// Read and parse the manifest file.
///
/// Entries come back in source order. The order is rclone's, not meaningful;
/// the grouper keeps it only to break sorting ties deterministically.
pub fn load(path: &Path) -> Result<Vec<FileEntry>, ManifestError> {
    let content = fs::read_to_string(path)?;
    let entries = serde_json::from_str(&content)?;
    Ok(entries)
}
