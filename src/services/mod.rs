//! Services module - The manifest pipeline stages.
//!
//! The pipeline is a straight-line transformation run once per collection:
//!
//! 1. [`scanner::scan_entries`]: single-level wildcard listing of the source
//!    directory (nonexistent directory scans as empty, per glob semantics)
//! 2. [`scanner::filter_images`]: case-insensitive extension filter against
//!    the recognized image extensions
//! 3. [`manifest::root_relative`]: rewrite each path relative to the
//!    filesystem root
//! 4. [`manifest::build_manifest`]: sort ascending into an [`ImageManifest`]
//! 5. [`manifest::write_manifest`]: pretty-printed JSON array, 4-space
//!    indentation, overwriting the output file
//!
//! The services are framework-agnostic and synchronous: no UI dependencies,
//! no async runtime, all inputs are explicit parameters.
//!
//! [`ImageManifest`]: crate::models::ImageManifest

pub mod manifest;
pub mod scanner;

pub use manifest::{build_manifest, generate_collection, root_relative, write_manifest};
pub use scanner::{filter_images, is_image_file, scan_entries};
