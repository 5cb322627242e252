//! Directory scanning and extension filtering.
//!
//! The scan is a single-level wildcard listing (`<source_dir>/*`), matching
//! glob semantics: a nonexistent directory produces an empty result rather
//! than an error. No distinction is made between files and subdirectories at
//! scan time; the extension filter drops anything without a recognized image
//! suffix.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// List all direct children of the source directory.
///
/// Entries that cannot be read or whose paths are not valid UTF-8 are
/// skipped with a warning. A nonexistent directory yields an empty vec.
/// Leading-dot entries are never matched; the `*` wildcard requires a
/// literal leading dot, so `.hidden.png` stays out of the manifest.
///
/// # Arguments
///
/// * `source_dir` - Directory to scan, one level only
pub fn scan_entries(source_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let pattern = source_dir.join("*");
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };

    let mut entries = Vec::new();
    for entry in glob::glob_with(pattern.as_str(), options)
        .with_context(|| format!("Invalid scan pattern: {}", pattern))?
    {
        match entry {
            Ok(path) => match Utf8PathBuf::from_path_buf(path) {
                Ok(path) => entries.push(path),
                Err(path) => {
                    tracing::warn!("Skipping non-UTF-8 path: {}", path.display());
                }
            },
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
            }
        }
    }

    tracing::info!("Scanned {}: {} entries", source_dir, entries.len());
    Ok(entries)
}

/// Check whether a path carries a recognized image extension.
///
/// The comparison lowercases the full path string and tests the suffix, so
/// `PHOTO.JPG` matches `.jpg` while the original casing is preserved for
/// output and sorting.
pub fn is_image_file(path: &Utf8Path, extensions: &[String]) -> bool {
    let lowered = path.as_str().to_lowercase();
    extensions
        .iter()
        .any(|ext| lowered.ends_with(&ext.to_lowercase()))
}

/// Retain only the entries with a recognized image extension.
///
/// Non-matching entries are dropped silently (debug log only).
pub fn filter_images(entries: Vec<Utf8PathBuf>, extensions: &[String]) -> Vec<Utf8PathBuf> {
    let total = entries.len();
    let images: Vec<Utf8PathBuf> = entries
        .into_iter()
        .filter(|path| {
            let keep = is_image_file(path, extensions);
            if !keep {
                tracing::debug!("Skipping non-image entry: {}", path);
            }
            keep
        })
        .collect();

    tracing::info!("Filtered {} entries down to {} images", total, images.len());
    images
}
