//! imagelist - sorted JSON image manifests for the Authenta guessing game
//!
//! Main entry point for the command-line tool.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/imagelist.<date>
//! 2. Load settings from imagelist.yaml (built-in defaults when absent)
//! 3. For each configured collection:
//!    - scan the source directory (single level)
//!    - filter by recognized image extensions (case-insensitive)
//!    - rewrite paths relative to the filesystem root
//!    - sort ascending and write the JSON manifest (4-space indent)
//!    - print the success line to stdout
//!
//! With no settings file on disk the run matches the original tool exactly:
//! scan `./fake`, write `fake.json`.
//!
//! Any I/O failure propagates as an anyhow error, terminating the process
//! with a nonzero status and no success line.

use anyhow::Result;
use imagelist::services::manifest::generate_collection;
use imagelist::{APP_NAME, SettingsManager, VERSION};

fn main() -> Result<()> {
    // Console logging stays off so stdout carries only the success lines
    let _guard = imagelist::logging::setup_logging("logs", "imagelist", false, false)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let settings_manager = SettingsManager::new(".")?;
    let settings = settings_manager.load_settings()?;

    tracing::info!(
        "Loaded settings - collections: {}, extensions: {}",
        settings.collections.len(),
        settings.extensions.len()
    );

    for collection in &settings.collections {
        let manifest = generate_collection(collection, &settings.extensions)?;

        println!("✅ Image list saved to {}", collection.output_file);
        tracing::info!(
            "Collection '{}' complete: {} images",
            collection.name,
            manifest.len()
        );
    }

    tracing::info!("All collections complete");
    Ok(())
}
