use serde::{Deserialize, Serialize};

/// Settings from imagelist.yaml
///
/// Holds the recognized image extensions and the list of collections to
/// generate manifests for. The defaults reproduce the original hard-coded
/// behavior: one `fake` collection scanned from `./fake` and written to
/// `fake.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(rename = "Image Extensions", default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(rename = "Collections", default = "default_collections")]
    pub collections: Vec<CollectionConfig>,
}

/// A single manifest job: scan one directory, write one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionConfig {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Source Dir")]
    pub source_dir: String,

    #[serde(rename = "Output File")]
    pub output_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            collections: default_collections(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    [".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_collections() -> Vec<CollectionConfig> {
    vec![CollectionConfig {
        name: "fake".to_string(),
        source_dir: "./fake".to_string(),
        output_file: "fake.json".to_string(),
    }]
}
