use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Ordered list of root-relative image paths for one collection.
///
/// Invariants:
/// - Every entry ends with a recognized extension (case-insensitive match
///   applied during filtering).
/// - Entries are sorted ascending by byte comparison.
/// - Entries are relative to the filesystem root, not the working directory.
///
/// Serializes transparently as a JSON array of strings, which is the format
/// the game frontend fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageManifest {
    paths: Vec<String>,
}

impl ImageManifest {
    /// Build a manifest from unordered path strings, sorting them ascending.
    pub fn from_paths(mut paths: Vec<String>) -> Self {
        paths.sort();
        Self { paths }
    }

    /// The ordered path entries.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Render the manifest as pretty-printed JSON with 4-space indentation.
    ///
    /// An empty manifest renders as exactly `[]`.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

        self.serialize(&mut serializer)
            .context("Failed to serialize manifest to JSON")?;

        String::from_utf8(buf).context("Serialized manifest is not valid UTF-8")
    }
}
