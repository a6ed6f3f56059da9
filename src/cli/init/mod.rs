//! Application initialization module.
//!
//! Creates a new application skeleton with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure and starter files
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{config::AppConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new application with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure and starter files
/// 3. Write configuration file
pub fn new_app(app_config: &AppConfig, has_name: bool) -> Result<()> {
    let root = app_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, &app_config.config_path, mode)?;

    structure::create_structure(root, &app_config.locations)?;
    structure::write_starter_files(root, &app_config.locations)?;
    config::write_config(&app_config.config_path)?;

    log!("init"; "application initialized at {}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::check_vital_directories;
    use tempfile::TempDir;

    fn app_at(root: &std::path::Path) -> AppConfig {
        let mut config = crate::config::test_config_at(root);
        config.config_path = root.join("funombi.toml");
        config
    }

    #[test]
    fn test_new_app_is_deployable() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");
        let config = app_at(&root);

        new_app(&config, true).unwrap();

        assert!(root.join("funombi.toml").is_file());
        assert!(check_vital_directories(&root, &config.locations, &[]).is_ok());
        let content = std::fs::read_to_string(root.join("funombi.toml")).unwrap();
        let (loaded, ignored) = AppConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(loaded.locations.public_dir, "public");
    }

    #[test]
    fn test_new_app_refuses_existing_install() {
        let temp = TempDir::new().unwrap();
        let config = app_at(temp.path());
        new_app(&config, false).unwrap();
        assert!(new_app(&config, false).is_err());
    }
}
