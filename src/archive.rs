//! Site packaging.
//!
//! Stage 4 of the pipeline. Walks the generated output directory and packs
//! it into a single zip placed next to it, named after the directory with a
//! `.zip` suffix (`static_site/` becomes `static_site.zip`).
//!
//! Entry names inside the archive are relative to the output directory, so
//! unzipping yields `index.html`, `docs/index.html`, and so on directly,
//! not a nested `static_site/` wrapper. Names use forward slashes on every
//! platform. An existing zip at the target path is overwritten.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::FileOptions;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Where the archive for `output_dir` lands.
///
/// Appends `.zip` to the full final component, so `site.v2` maps to
/// `site.v2.zip` rather than `site.zip`.
pub fn archive_path(output_dir: &Path) -> PathBuf {
    let mut name = output_dir.as_os_str().to_os_string();
    name.push(".zip");
    PathBuf::from(name)
}

/// Pack `output_dir` into an adjacent zip and return the zip's path.
///
/// Directory entries are stored, page files deflated. The walk happens at
/// call time, so anything placed in the output directory since generation is
/// packed too.
pub fn archive(output_dir: &Path) -> Result<PathBuf, ArchiveError> {
    let zip_path = archive_path(output_dir);
    let file = File::create(&zip_path)?;
    let mut zip = zip::ZipWriter::new(file);

    for entry in WalkDir::new(output_dir) {
        let entry = entry?;
        let path = entry.path();
        // Walk roots at output_dir, so the prefix always strips.
        let name = path
            .strip_prefix(output_dir)
            .unwrap()
            .to_string_lossy()
            .replace("\\", "/");

        if path.is_dir() {
            if !name.is_empty() {
                let options = FileOptions::<()>::default()
                    .compression_method(CompressionMethod::Stored)
                    .unix_permissions(0o755);
                zip.add_directory(&name, options)?;
            }
        } else {
            let options = FileOptions::<()>::default()
                .compression_method(CompressionMethod::Deflated)
                .unix_permissions(0o644);
            zip.start_file(&name, options)?;

            let mut f = File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }
    }

    zip.finish()?;
    Ok(zip_path)
}
