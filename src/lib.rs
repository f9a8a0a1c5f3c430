//! # lsjson-site
//!
//! A one-shot static directory-browser generator for rclone remotes. Point it
//! at the `files.json` produced by `rclone lsjson -R`, and it emits a
//! browsable HTML mirror of the remote's directory tree — one searchable,
//! sortable listing page per directory — plus a zip of the whole site.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Load      files.json   →  Vec<FileEntry>    (rclone manifest → structured data)
//! 2. Group     entries      →  DirectoryTree     (flat listing → per-directory children)
//! 3. Generate  tree         →  static_site/      (one index.html per directory)
//! 4. Archive   static_site  →  static_site.zip   (single deployable artifact)
//! ```
//!
//! Stages 1-3 are pure functions over plain data; only generation and
//! archiving touch the filesystem. Unit tests exercise the pipeline logic
//! without a real remote in sight.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Stage 1 — reads and parses the rclone lsjson manifest |
//! | [`tree`] | Stage 2 — groups flat manifest entries under their parent directories |
//! | [`generate`] | Stage 3 — renders one listing page per directory using Maud |
//! | [`archive`] | Stage 4 — packs the generated site into a deployable zip |
//! | [`config`] | Run settings and their compiled-in defaults |
//! | [`output`] | CLI output formatting — testable report of generated pages |
//!
//! # Design Decisions
//!
//! ## An Index, Not a Mirror
//!
//! Pages never copy remote bytes. File rows link straight to the serving
//! endpoint (an `rclone serve` instance or any HTTP gateway in front of the
//! remote), so the generated site stays a few kilobytes per directory no
//! matter how large the remote is, and regenerating it never re-downloads
//! anything.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, which matters
//!   when remote file names are attacker-controlled.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Self-Contained Pages
//!
//! Every page embeds its CSS and JavaScript inline. There is no shared asset
//! to 404 on, any subtree of the site can be copied or served on its own, and
//! the whole site works from `file://` URLs. The client script is ~50 lines
//! of vanilla JavaScript: human-readable sizes, column sorting, name filter.
//!
//! ## Deterministic Output
//!
//! Directories are rendered in sorted order and pages carry no timestamps, so
//! regenerating from the same manifest is byte-identical. Diffs against a
//! previous run show exactly what changed on the remote.

pub mod archive;
pub mod config;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_helpers;
