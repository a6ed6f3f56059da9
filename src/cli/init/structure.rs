//! Application directory structure creation.
//!
//! Creates the public web root with its vital asset directories, the view
//! directories and the starter assets the default views link.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::asset::AssetCategory;
use crate::config::LocationsConfig;
use crate::view::{APP_CSS, APP_JS, DEFAULT_VIEWS};

/// Create the directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path, locations: &LocationsConfig) -> Result<()> {
    let public = locations.public_root(root);
    let views = locations.views_root(root);

    let dirs = AssetCategory::ALL
        .iter()
        .map(|category| public.join(locations.dir_for(*category)))
        .chain(locations.extra.iter().map(|extra| public.join(extra)))
        .chain(["Home", "Errors"].iter().map(|sub| views.join(sub)));

    for path in dirs {
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

/// Write starter assets and the default views.
///
/// Existing files are left untouched.
pub fn write_starter_files(root: &Path, locations: &LocationsConfig) -> Result<()> {
    let public = locations.public_root(root);
    let views = locations.views_root(root);

    let stylesheet = public
        .join(locations.dir_for(AssetCategory::Stylesheet))
        .join("app.css");
    let script = public
        .join(locations.dir_for(AssetCategory::Script))
        .join("app.js");

    let files = [(stylesheet, APP_CSS), (script, APP_JS)]
        .into_iter()
        .chain(DEFAULT_VIEWS.iter().map(|(name, content)| (views.join(name), *content)));

    for (path, content) in files {
        if path.exists() {
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_app");

        create_structure(&root, &LocationsConfig::default()).unwrap();

        assert!(root.join("public/stylesheets").is_dir());
        assert!(root.join("public/javascripts").is_dir());
        assert!(root.join("public/images").is_dir());
        assert!(root.join("views/Home").is_dir());
        assert!(root.join("views/Errors").is_dir());
    }

    #[test]
    fn test_create_structure_custom_locations() {
        let temp = TempDir::new().unwrap();
        let locations = LocationsConfig {
            public_dir: "web".into(),
            images: "img".into(),
            extra: vec!["fonts".into()],
            ..LocationsConfig::default()
        };

        create_structure(temp.path(), &locations).unwrap();

        assert!(temp.path().join("web/img").is_dir());
        assert!(temp.path().join("web/fonts").is_dir());
    }

    #[test]
    fn test_starter_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let locations = LocationsConfig::default();
        create_structure(temp.path(), &locations).unwrap();

        let css = temp.path().join("public/stylesheets/app.css");
        fs::write(&css, "custom").unwrap();
        write_starter_files(temp.path(), &locations).unwrap();

        assert_eq!(fs::read_to_string(&css).unwrap(), "custom");
        assert!(temp.path().join("public/javascripts/app.js").is_file());
        assert!(temp.path().join("views/Home/index.html").is_file());
        assert!(temp.path().join("views/Errors/error.html").is_file());
    }
}
