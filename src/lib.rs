// imagelist - sorted JSON image manifests for the Authenta guessing game
//
// This is the library crate containing the manifest pipeline and settings layer.
// The binary crate (main.rs) provides the command-line entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::SettingsManager;
pub use models::{CollectionConfig, ImageManifest, Settings};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
