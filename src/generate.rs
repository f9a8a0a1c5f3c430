//! HTML listing generation.
//!
//! Stage 3 of the pipeline. Takes the grouped directory tree and writes one
//! browsable `index.html` per directory, mirroring the manifest's structure.
//!
//! ## Output Structure
//!
//! ```text
//! static_site/
//! ├── index.html                 # root listing (the "." key)
//! ├── docs/
//! │   ├── index.html             # listing of docs/
//! │   └── guides/
//! │       └── index.html         # listing of docs/guides/
//! └── media/
//!     └── index.html
//! ```
//!
//! ## Page Anatomy
//!
//! Each page is one self-contained document: inline dark-theme `<style>`,
//! inline listing `<script>`, a search box, and a single table. Rows come in
//! a fixed raw order — parent link (non-root pages only), folders sorted by
//! name, files sorted by name — and the client script re-sorts or filters
//! them in the viewer's browser without touching what is on disk.
//!
//! Folder rows always carry the `-1` size sentinel, even when the manifest
//! reports a size for the directory entry; the script displays it as `-`.
//! File rows link straight to the configured file server — the generated
//! site never serves bytes itself.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: dark listing theme
//! - `static/listing.js`: size formatting, column sort, name filter
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every manifest-controlled string (names, paths) is interpolated through
//! maud and therefore HTML-escaped; the embedded fragments above are the
//! only `PreEscaped` content on a page.

use crate::manifest::FileEntry;
use crate::tree::{DirectoryTree, ROOT_KEY};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/listing.js");

/// Size value rendered into folder cells; the client script shows it as `-`.
const DIR_SIZE_SENTINEL: i64 = -1;

/// Relative output path of a directory's listing page.
pub fn page_relpath(dir_path: &str) -> PathBuf {
    if dir_path == ROOT_KEY {
        PathBuf::from("index.html")
    } else {
        Path::new(dir_path).join("index.html")
    }
}

/// Render and write every listing page under `output_root`.
///
/// The output root is created even for an empty tree, so the archiver always
/// has a directory to package. Existing pages are overwritten and
/// intermediate directories created as needed. Pages are UTF-8 with Unix
/// line endings on every platform. The first filesystem error aborts the
/// run, leaving already-written pages in place.
pub fn generate(
    tree: &DirectoryTree,
    output_root: &Path,
    base_url: &str,
) -> Result<(), GenerateError> {
    fs::create_dir_all(output_root)?;

    for (dir_path, children) in tree {
        let page = render_listing(dir_path, children, base_url);
        let out_path = output_root.join(page_relpath(dir_path));
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, page.into_string())?;
    }

    Ok(())
}

/// Render one directory's listing page.
pub fn render_listing(dir_path: &str, children: &[FileEntry], base_url: &str) -> Markup {
    let base_url = base_url.trim_end_matches('/');

    let mut folders: Vec<&FileEntry> = children.iter().filter(|e| e.is_dir).collect();
    let mut files: Vec<&FileEntry> = children.iter().filter(|e| !e.is_dir).collect();
    // Case-sensitive name order; sort_by is stable, so manifest order breaks ties.
    folders.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Directory listing of /" (dir_path) }
                style { (PreEscaped(CSS)) }
                script { (PreEscaped(JS)) }
            }
            body {
                h1 { "Index of /" (dir_path) }
                input type="text" id="search" onkeyup="filterTable()" placeholder="Search files and folders...";
                table id="fileTable" {
                    thead {
                        tr {
                            th onclick="sortTable(0, false)" { "Name" }
                            th onclick="sortTable(1, true)" { "Size" }
                        }
                    }
                    tbody {
                        @if dir_path != ROOT_KEY {
                            (parent_row())
                        }
                        @for folder in folders {
                            (folder_row(folder))
                        }
                        @for file in files {
                            (file_row(file, base_url))
                        }
                    }
                }
            }
        }
    }
}

/// Link back to the enclosing directory. Tagged `parent-dir` so the client
/// filter leaves it visible; the plain `-` cell carries no `filesize` class
/// and is never rewritten by the size formatter.
fn parent_row() -> Markup {
    html! {
        tr.parent-dir {
            td { a href="../" { "Parent Directory" } }
            td { "-" }
        }
    }
}

fn folder_row(folder: &FileEntry) -> Markup {
    html! {
        tr {
            td { a href={ (folder.name) "/" } { (folder.name) "/" } }
            td.filesize { (DIR_SIZE_SENTINEL) }
        }
    }
}

fn file_row(file: &FileEntry, base_url: &str) -> Markup {
    html! {
        tr {
            td { a href={ (base_url) "/" (file.path) } { (file.name) } }
            td.filesize { (file.size) }
        }
    }
}
