//! Data models for the imagelist application.
//!
//! This module contains the core data structures:
//! - [`ImageManifest`]: The ordered, root-relative image path list written as JSON
//! - [`Settings`]: Recognized extensions and collection list loaded from `imagelist.yaml`
//! - [`CollectionConfig`]: One named (source directory, output file) manifest job
//!
//! All structures are serde-serializable: settings persist as YAML through
//! [`SettingsManager`](crate::config::SettingsManager), manifests as JSON arrays.

pub mod manifest;
pub mod settings;

pub use manifest::ImageManifest;
pub use settings::{CollectionConfig, Settings};
