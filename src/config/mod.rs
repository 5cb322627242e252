use crate::models::Settings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Settings manager for loading and saving the YAML settings file.
///
/// Manages a single file, `imagelist.yaml`, in the settings directory.
/// When the file does not exist the built-in defaults are used, which
/// reproduce the original hard-coded behavior (scan `./fake`, write
/// `fake.json`).
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl SettingsManager {
    /// Create a new SettingsManager rooted at the specified directory.
    ///
    /// # Arguments
    /// * `settings_dir` - Directory containing `imagelist.yaml` (e.g., ".")
    pub fn new<P: AsRef<Utf8Path>>(settings_dir: P) -> Result<Self> {
        let settings_dir = settings_dir.as_ref().to_path_buf();

        // Create settings directory if it doesn't exist
        if !settings_dir.exists() {
            fs::create_dir_all(&settings_dir).with_context(|| {
                format!("Failed to create settings directory: {}", settings_dir)
            })?;
        }

        Ok(Self {
            settings_path: settings_dir.join("imagelist.yaml"),
            settings_dir,
        })
    }

    /// Load the settings file.
    ///
    /// # Returns
    /// The loaded Settings, or defaults if the file doesn't exist
    pub fn load_settings(&self) -> Result<Settings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(Settings::default());
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: Settings = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Save the settings file.
    ///
    /// # Arguments
    /// * `settings` - The Settings to save
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Get the settings directory path.
    pub fn settings_dir(&self) -> &Utf8Path {
        &self.settings_dir
    }
}
