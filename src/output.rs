//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The generation report is **directory-centric, not file-centric**: each
//! line leads with the directory's positional index and manifest path,
//! followed by `→` and the listing page it produced. Readable as a site
//! inventory while still mapping every directory to a concrete output file.
//!
//! # Output Format
//!
//! ```text
//! Generating 3 directory listing pages...
//! 001 . → index.html
//! 002 docs → docs/index.html
//! 003 docs/guides → docs/guides/index.html
//! ```
//!
//! The run banner and archive status lines are printed directly by `main`;
//! this module owns the per-stage blocks that benefit from testable
//! formatting.
//!
//! # Architecture
//!
//! Each block has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::page_relpath;
use crate::tree::DirectoryTree;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the generate stage report: page count header, then one line per
/// directory mapping it to its listing page.
pub fn format_generate_output(tree: &DirectoryTree) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Generating {} directory listing pages...",
        tree.len()
    ));

    for (i, dir_path) in tree.keys().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            dir_path,
            page_relpath(dir_path).display()
        ));
    }

    lines
}

/// Print the generate stage report to stdout.
pub fn print_generate_output(tree: &DirectoryTree) {
    for line in format_generate_output(tree) {
        println!("{}", line);
    }
}

/// The message shown when the manifest cannot be read or parsed. Points at
/// the rclone command that produces it.
pub fn manifest_error_line(manifest_path: &Path) -> String {
    format!(
        "Error: {} is missing or invalid. Please run 'rclone lsjson' command first.",
        manifest_path.display()
    )
}
