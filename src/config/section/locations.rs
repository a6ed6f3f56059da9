//! `[locations]` section configuration.
//!
//! Directory names of the deployed application, relative to the root.
//!
//! # Example
//!
//! ```toml
//! [locations]
//! public_dir = "public"        # Web root served over HTTP
//! stylesheets = "stylesheets"  # public/<stylesheets>
//! javascripts = "javascripts"  # public/<javascripts>
//! images = "images"            # public/<images>
//! views = "views"              # Page templates
//! extra = ["fonts"]            # Additional vital directories under public_dir
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::AssetCategory;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_plain_relative;

/// Directory layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationsConfig {
    /// Web root, relative to the installation root.
    pub public_dir: String,
    /// Stylesheet directory under `public_dir`.
    pub stylesheets: String,
    /// Script directory under `public_dir`.
    pub javascripts: String,
    /// Image directory under `public_dir`.
    pub images: String,
    /// View templates, relative to the installation root.
    pub views: String,
    /// Extra directories under `public_dir` that must exist.
    pub extra: Vec<String>,
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".into(),
            stylesheets: AssetCategory::Stylesheet.default_dir().into(),
            javascripts: AssetCategory::Script.default_dir().into(),
            images: AssetCategory::Image.default_dir().into(),
            views: "views".into(),
            extra: Vec::new(),
        }
    }
}

impl LocationsConfig {
    pub const PUBLIC_DIR: FieldPath = FieldPath::new("locations.public_dir");
    pub const STYLESHEETS: FieldPath = FieldPath::new("locations.stylesheets");
    pub const JAVASCRIPTS: FieldPath = FieldPath::new("locations.javascripts");
    pub const IMAGES: FieldPath = FieldPath::new("locations.images");
    pub const VIEWS: FieldPath = FieldPath::new("locations.views");
    pub const EXTRA: FieldPath = FieldPath::new("locations.extra");

    /// Directory name configured for a category.
    pub fn dir_for(&self, category: AssetCategory) -> &str {
        match category {
            AssetCategory::Stylesheet => &self.stylesheets,
            AssetCategory::Script => &self.javascripts,
            AssetCategory::Image => &self.images,
        }
    }

    /// Reverse lookup: which category owns a directory name.
    pub fn category_of(&self, dir: &str) -> Option<AssetCategory> {
        AssetCategory::ALL
            .into_iter()
            .find(|category| self.dir_for(*category) == dir)
    }

    /// Absolute web root under `root`.
    pub fn public_root(&self, root: &Path) -> PathBuf {
        root.join(&self.public_dir)
    }

    /// Absolute view directory under `root`.
    pub fn views_root(&self, root: &Path) -> PathBuf {
        root.join(&self.views)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let dirs = [
            (Self::PUBLIC_DIR, &self.public_dir),
            (Self::STYLESHEETS, &self.stylesheets),
            (Self::JAVASCRIPTS, &self.javascripts),
            (Self::IMAGES, &self.images),
            (Self::VIEWS, &self.views),
        ];
        for (field, value) in dirs {
            if !is_plain_relative(value) {
                diag.error_with_hint(
                    field,
                    format!("`{value}` is not a relative directory name"),
                    "use a non-empty path without `..` or a leading `/`",
                );
            }
        }

        for value in &self.extra {
            if !is_plain_relative(value) {
                diag.error(
                    Self::EXTRA,
                    format!("`{value}` is not a relative directory name"),
                );
            }
        }

        let asset_dirs = [&self.stylesheets, &self.javascripts, &self.images];
        for (i, dir) in asset_dirs.iter().enumerate() {
            if asset_dirs[..i].contains(dir) {
                diag.error(
                    Self::dir_field(AssetCategory::ALL[i]),
                    format!("`{dir}` is already used by another asset category"),
                );
            }
        }
    }

    fn dir_field(category: AssetCategory) -> FieldPath {
        match category {
            AssetCategory::Stylesheet => Self::STYLESHEETS,
            AssetCategory::Script => Self::JAVASCRIPTS,
            AssetCategory::Image => Self::IMAGES,
        }
    }
}
