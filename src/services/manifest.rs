//! Manifest construction: path normalization, sorting, and the JSON write.
//!
//! Paths are rewritten relative to the filesystem root, not the working
//! directory. A relative source directory is first resolved against the
//! working directory, so the entries for `./fake/a.png` come out as
//! `home/user/project/fake/a.png`. This mirrors the original tool's
//! relativization and is kept deliberately, surprising as it looks for
//! deeply nested working directories.

use crate::models::{CollectionConfig, ImageManifest};
use crate::services::scanner;
use anyhow::{Context, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// Errors from path normalization
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Working directory is not valid UTF-8: {0}")]
    NonUtf8WorkingDir(String),
}

/// Rewrite a path relative to the filesystem root.
///
/// The path is joined onto the current working directory (absolute paths
/// pass through unchanged), `.` and `..` components are collapsed, and the
/// leading root is stripped. A `..` with nothing left to pop is dropped,
/// so `/../a.png` normalizes to `a.png` the way `normpath` treats parent
/// references at the root.
pub fn root_relative(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| NormalizeError::NonUtf8WorkingDir(p.display().to_string()))?;

    let absolute = cwd.join(path);

    let mut parts: Vec<&str> = Vec::new();
    for component in absolute.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                parts.pop();
            }
            Utf8Component::Normal(part) => parts.push(part),
        }
    }

    let mut relative = Utf8PathBuf::new();
    for part in parts {
        relative.push(part);
    }
    Ok(relative)
}

/// Build the sorted manifest for one source directory.
///
/// Composes the pipeline: scan, extension filter, root-relativization, sort.
pub fn build_manifest(source_dir: &Utf8Path, extensions: &[String]) -> Result<ImageManifest> {
    let entries = scanner::scan_entries(source_dir)?;
    let images = scanner::filter_images(entries, extensions);

    let mut paths = Vec::with_capacity(images.len());
    for image in &images {
        let relative = root_relative(image)
            .with_context(|| format!("Failed to normalize path: {}", image))?;
        paths.push(relative.into_string());
    }

    Ok(ImageManifest::from_paths(paths))
}

/// Write a manifest to the output file, overwriting any existing file.
pub fn write_manifest(manifest: &ImageManifest, output_file: &Utf8Path) -> Result<()> {
    let json = manifest.to_json_pretty()?;

    fs::write(output_file, json)
        .with_context(|| format!("Failed to write manifest: {}", output_file))?;

    tracing::info!("Wrote {} entries to {}", manifest.len(), output_file);
    Ok(())
}

/// Run the full pipeline for one collection and return the written manifest.
pub fn generate_collection(
    collection: &CollectionConfig,
    extensions: &[String],
) -> Result<ImageManifest> {
    tracing::info!(
        "Generating collection '{}': {} -> {}",
        collection.name,
        collection.source_dir,
        collection.output_file
    );

    let manifest = build_manifest(Utf8Path::new(&collection.source_dir), extensions)?;
    write_manifest(&manifest, Utf8Path::new(&collection.output_file))?;

    Ok(manifest)
}
