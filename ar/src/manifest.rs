//! Asset manifest loading

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Mapping from logical asset name to its built (usually hashed) path
///
/// Loaded from a flat JSON object of string keys to string values. Anything
/// else (nested objects, numbers, a top-level array) fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        debug!("Manifest::load: reading {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| AssetError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: Manifest = serde_json::from_str(&content).map_err(|source| AssetError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Manifest::load: {} entries from {}", manifest.len(), path.display());
        Ok(manifest)
    }

    /// Look up the resolved path for an asset key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_flat_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(
            &path,
            r#"{"js/site.js": "js/site.a1b2c3.js", "css/site.css": "css/site.d4e5f6.css"}"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("js/site.js"), Some("js/site.a1b2c3.js"));
        assert_eq!(manifest.get("css/site.css"), Some("css/site.d4e5f6.css"));
        assert!(manifest.get("js/other.js").is_none());
        assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["css/site.css", "js/site.js"]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(temp.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ManifestRead);
    }

    #[test]
    fn test_load_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(&path, "{bad json").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ManifestParse);
    }

    #[test]
    fn test_load_rejects_nested_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(&path, r#"{"js": {"site.js": "site.a1.js"}}"#).unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ManifestParse);
    }

    #[test]
    fn test_empty_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(&path, "{}").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.is_empty());
    }
}
