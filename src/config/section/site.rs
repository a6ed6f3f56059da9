//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! title = "My App"
//! path_prefix = "app"         # Mounted under http://host/app/
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown on rendered pages.
    pub title: String,
    /// URL path the application is mounted under.
    pub path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Funombi".into(),
            path_prefix: String::new(),
        }
    }
}

impl SiteConfig {
    pub const PATH_PREFIX: FieldPath = FieldPath::new("site.path_prefix");

    /// Base URL path with leading and trailing slash.
    ///
    /// - `""` -> `/`
    /// - `"app"` -> `/app/`
    /// - `"/a/b/"` -> `/a/b/`
    pub fn base_path(&self) -> String {
        let parts: Vec<_> = self
            .path_prefix
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", parts.join("/"))
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path_prefix.contains(['?', '#', ' ']) {
            diag.error(
                Self::PATH_PREFIX,
                format!("`{}` must be a plain URL path", self.path_prefix),
            );
        }
    }
}
