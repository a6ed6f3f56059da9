//! Known-good digest manifest.
//!
//! The on-disk manifest is nested JSON, one object level per path segment:
//!
//! ```json
//! { "Core": { "Files": { "php": { "sha512": "9f86..." } } } }
//! ```
//!
//! It is flattened at load time into dotted keys (`Core.Files.php.sha512`).

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::{DigestAlgorithm, IntegrityError};

/// Flattened `dotted.key -> hex digest` table. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: FxHashMap<String, String>,
}

impl Manifest {
    /// Read and flatten a manifest file.
    pub fn load(path: &Path) -> Result<Self, IntegrityError> {
        let content =
            fs::read_to_string(path).map_err(|err| IntegrityError::Io(path.to_path_buf(), err))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|err| IntegrityError::Manifest(path.to_path_buf(), err))?;

        if !value.is_object() {
            return Err(IntegrityError::Manifest(
                path.to_path_buf(),
                serde::de::Error::custom("top-level value must be an object"),
            ));
        }
        Ok(Self::from_value(&value))
    }

    /// Flatten an already parsed JSON document.
    ///
    /// Only string leaves are kept.
    pub fn from_value(value: &Value) -> Self {
        let mut entries = FxHashMap::default();
        flatten_into(&mut entries, String::new(), value);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Expected digest for a root-relative key prefix and algorithm.
    pub fn expected(&self, key: &str, algorithm: DigestAlgorithm) -> Result<&str, IntegrityError> {
        let full = format!("{key}.{}", algorithm.name());
        self.get(&full)
            .ok_or(IntegrityError::ManifestKeyNotFound(full))
    }
}

fn flatten_into(entries: &mut FxHashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(entries, path, child);
            }
        }
        Value::String(digest) if !prefix.is_empty() => {
            entries.insert(prefix, digest.to_ascii_lowercase());
        }
        _ => {}
    }
}
