//! Application configuration management for `funombi.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── integrity  # [integrity]
//! │   ├── locations  # [locations]
//! │   ├── serve      # [serve]
//! │   ├── session    # [session]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # AppConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{IntegrityConfig, LocationsConfig, ServeConfig, SessionConfig, SiteConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing funombi.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Installation root - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory layout
    #[serde(default)]
    pub locations: LocationsConfig,

    /// Session flags
    #[serde(default)]
    pub session: SessionConfig,

    /// Site title and mount path
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Integrity manifest settings
    #[serde(default)]
    pub integrity: IntegrityConfig,
}

impl AppConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; the installation root
    /// is the directory holding it. `init` and the standalone commands
    /// (`digest`, `sanitize`) fall back to defaults rooted at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if let Commands::Init { name } = &cli.command {
            let root = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
            let mut config = Self::default();
            config.config_path = root.join(&cli.config);
            config.set_root(&root);
            return Ok(config);
        }

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = crate::utils::path::normalize_path(&path);
                config.set_root(&crate::utils::path::normalize_path(&root));
                config
            }
            None if cli.needs_project() => {
                bail!(ConfigError::NotFound(cli.config.clone()));
            }
            None => {
                let mut config = Self::default();
                config.set_root(&cwd);
                config
            }
        };

        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        for field in &ignored {
            crate::log!("warning"; "{}: unknown field `{field}` ignored", path.display());
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Get the installation root
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the installation root
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute web root.
    pub fn public_root(&self) -> PathBuf {
        self.locations.public_root(&self.root)
    }

    /// Absolute view directory.
    pub fn views_root(&self) -> PathBuf {
        self.locations.views_root(&self.root)
    }

    /// Absolute manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root_join(&self.integrity.manifest)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.locations.validate(&mut diag);
        self.site.validate(&mut diag);
        self.serve.validate(&mut diag);
        self.integrity.validate(&mut diag);

        Ok(diag.finish()?)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppConfig {
    let (parsed, ignored) = AppConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Config rooted at `root` with default sections.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.set_root(root);
    config
}

// ============================================================================
// tests
// ============================================================================
