//! Integration tests for settings loading and saving.

use camino::Utf8PathBuf;
use imagelist::{CollectionConfig, Settings, SettingsManager};
use std::fs;
use tempfile::TempDir;

fn create_test_settings_manager() -> (SettingsManager, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let settings_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = SettingsManager::new(&settings_dir).unwrap();
    (manager, temp_dir)
}

#[test]
fn test_new_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = Utf8PathBuf::try_from(temp_dir.path().join("nested")).unwrap();

    let manager = SettingsManager::new(&nested).unwrap();
    assert!(manager.settings_dir().exists());
}

#[test]
fn test_defaults_match_original_constants() {
    let (manager, _temp_dir) = create_test_settings_manager();

    let settings = manager.load_settings().unwrap();
    assert_eq!(settings.collections.len(), 1);
    assert_eq!(settings.collections[0].source_dir, "./fake");
    assert_eq!(settings.collections[0].output_file, "fake.json");
    assert_eq!(
        settings.extensions,
        [".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp"]
    );
}

#[test]
fn test_save_then_load_round_trips() {
    let (manager, _temp_dir) = create_test_settings_manager();

    let settings = Settings {
        extensions: vec![".png".to_string(), ".webp".to_string()],
        collections: vec![
            CollectionConfig {
                name: "fake".to_string(),
                source_dir: "./fake".to_string(),
                output_file: "fake.json".to_string(),
            },
            CollectionConfig {
                name: "real".to_string(),
                source_dir: "./real".to_string(),
                output_file: "real.json".to_string(),
            },
        ],
    };

    manager.save_settings(&settings).unwrap();
    let loaded = manager.load_settings().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_hand_written_yaml_is_parsed() {
    let (manager, _temp_dir) = create_test_settings_manager();

    let yaml = r#"
Image Extensions:
  - ".png"
Collections:
  - Name: screenshots
    Source Dir: ./screenshots
    Output File: screenshots.json
"#;
    fs::write(manager.settings_dir().join("imagelist.yaml"), yaml).unwrap();

    let loaded = manager.load_settings().unwrap();
    assert_eq!(loaded.extensions, [".png"]);
    assert_eq!(loaded.collections.len(), 1);
    assert_eq!(loaded.collections[0].name, "screenshots");
    assert_eq!(loaded.collections[0].output_file, "screenshots.json");
}

#[test]
fn test_partial_yaml_falls_back_to_defaults() {
    let (manager, _temp_dir) = create_test_settings_manager();

    let yaml = r#"
Collections:
  - Name: real
    Source Dir: ./real
    Output File: real.json
"#;
    fs::write(manager.settings_dir().join("imagelist.yaml"), yaml).unwrap();

    let loaded = manager.load_settings().unwrap();
    // Extensions omitted, so the default set applies
    assert_eq!(loaded.extensions.len(), 6);
    assert_eq!(loaded.collections[0].name, "real");
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let (manager, _temp_dir) = create_test_settings_manager();

    fs::write(
        manager.settings_dir().join("imagelist.yaml"),
        "Collections: [unclosed",
    )
    .unwrap();

    assert!(manager.load_settings().is_err());
}
