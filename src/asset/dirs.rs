//! Vital directory checks.
//!
//! A deployment is only usable when the stylesheet, script and image
//! directories exist under the public root, together with any extra
//! directories the caller declares.

use std::path::Path;

use super::{AssetCategory, AssetError};
use crate::config::LocationsConfig;

/// Existence flags for every directory a deployment needs.
///
/// Computed once per check. Extras come first, followed by the built-in
/// categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectorySet {
    public_dir: String,
    entries: Vec<(String, bool)>,
}

impl AssetDirectorySet {
    /// Stat every vital directory under `root`.
    pub fn scan(root: &Path, locations: &LocationsConfig, extra: &[String]) -> Self {
        let public_root = locations.public_root(root);

        let mut names: Vec<&str> = Vec::with_capacity(extra.len() + AssetCategory::ALL.len());
        let builtin = AssetCategory::ALL.map(|category| locations.dir_for(category));
        for name in extra {
            if !builtin.contains(&name.as_str()) && !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names.extend(builtin);

        let entries = names
            .into_iter()
            .map(|name| (name.to_string(), public_root.join(name).is_dir()))
            .collect();

        Self {
            public_dir: locations.public_dir.clone(),
            entries,
        }
    }

    /// Directory names with their existence flag, in check order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, exists)| (name.as_str(), *exists))
    }

    /// First directory that does not exist, as `public_dir/name`.
    pub fn first_missing(&self) -> Option<String> {
        self.entries
            .iter()
            .find(|(_, exists)| !exists)
            .map(|(name, _)| format!("{}/{}", self.public_dir, name))
    }

    /// Fail on the first missing directory.
    pub fn ensure_all(&self) -> Result<(), AssetError> {
        match self.first_missing() {
            Some(path) => Err(AssetError::MissingDirectory(path)),
            None => Ok(()),
        }
    }
}

/// Verify all vital directories exist, failing fast on the first missing one.
pub fn check_vital_directories(
    root: &Path,
    locations: &LocationsConfig,
    extra: &[String],
) -> Result<(), AssetError> {
    AssetDirectorySet::scan(root, locations, extra).ensure_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn deployed(extra: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["stylesheets", "javascripts", "images"].iter().chain(extra) {
            fs::create_dir_all(dir.path().join("public").join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn test_all_directories_present() {
        let dir = deployed(&[]);
        let locations = LocationsConfig::default();
        assert!(check_vital_directories(dir.path(), &locations, &[]).is_ok());
    }

    #[test]
    fn test_each_missing_builtin_is_named() {
        for missing in ["stylesheets", "javascripts", "images"] {
            let dir = deployed(&[]);
            fs::remove_dir(dir.path().join("public").join(missing)).unwrap();

            let err = check_vital_directories(dir.path(), &LocationsConfig::default(), &[])
                .unwrap_err();
            match err {
                AssetError::MissingDirectory(path) => {
                    assert_eq!(path, format!("public/{missing}"))
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_extra_directories_checked() {
        let dir = deployed(&["fonts"]);
        let locations = LocationsConfig::default();
        let extra = vec!["fonts".to_string()];
        assert!(check_vital_directories(dir.path(), &locations, &extra).is_ok());

        let extra = vec!["fonts".to_string(), "uploads".to_string()];
        let err = check_vital_directories(dir.path(), &locations, &extra).unwrap_err();
        assert!(matches!(err, AssetError::MissingDirectory(ref p) if p == "public/uploads"));
    }

    #[test]
    fn test_fail_fast_reports_first_missing_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();

        let extra = vec!["media".to_string()];
        let set = AssetDirectorySet::scan(dir.path(), &LocationsConfig::default(), &extra);
        assert_eq!(set.entries().filter(|(_, exists)| !exists).count(), 4);
        assert_eq!(set.first_missing().as_deref(), Some("public/media"));
    }

    #[test]
    fn test_extras_duplicating_builtins_are_merged() {
        let dir = deployed(&[]);
        let extra = vec!["images".to_string(), "images".to_string()];
        let set = AssetDirectorySet::scan(dir.path(), &LocationsConfig::default(), &extra);
        assert_eq!(set.entries().count(), 3);
        assert!(set.ensure_all().is_ok());
    }

    #[test]
    fn test_custom_locations() {
        let dir = TempDir::new().unwrap();
        for name in ["css", "js", "img"] {
            fs::create_dir_all(dir.path().join("web").join(name)).unwrap();
        }
        let locations = LocationsConfig {
            public_dir: "web".into(),
            stylesheets: "css".into(),
            javascripts: "js".into(),
            images: "img".into(),
            ..LocationsConfig::default()
        };
        assert!(check_vital_directories(dir.path(), &locations, &[]).is_ok());
        assert!(check_vital_directories(dir.path(), &LocationsConfig::default(), &[]).is_err());
    }

    #[test]
    fn test_regular_file_is_not_a_directory() {
        let dir = deployed(&[]);
        let images = dir.path().join("public/images");
        fs::remove_dir(&images).unwrap();
        fs::write(&images, "not a dir").unwrap();

        let err = check_vital_directories(dir.path(), &LocationsConfig::default(), &[]).unwrap_err();
        assert!(matches!(err, AssetError::MissingDirectory(_)));
    }
}
