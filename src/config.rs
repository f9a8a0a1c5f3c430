//! Run configuration.
//!
//! The generator is driven by three values, the compiled-in constants of the
//! original deployment: where the manifest lives, where the site goes, and
//! the base URL under which an external server answers for file bytes. The
//! CLI exposes each as an optional flag whose default is the constant, so a
//! bare `lsjson-site` invocation behaves the same on every machine.
//!
//! There is no config file and no environment lookup — this struct is the
//! whole configuration surface, built once in `main` and read-only after.

use std::path::PathBuf;

/// Default manifest filename, as produced by `rclone lsjson -R ... > files.json`.
pub const DEFAULT_MANIFEST_FILE: &str = "files.json";

/// Default directory the generated site is written into.
pub const DEFAULT_OUTPUT_DIR: &str = "static_site";

/// Default base URL of the file server answering for file bytes.
pub const DEFAULT_SERVE_URL: &str = "https://a.111477.xyz";

/// Run-scoped configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Path to the rclone `lsjson` manifest.
    pub manifest_path: PathBuf,
    /// Directory the generated site is written into.
    pub output_dir: PathBuf,
    /// Base URL prefixed to every file link. Trailing slashes are tolerated;
    /// the renderer trims them before composing URLs.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_SERVE_URL.to_string(),
        }
    }
}
