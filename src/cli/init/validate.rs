//! Pre-initialization validation.
//!
//! Validates target directory state before creating the application.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `funombi init` - initialize in current directory
    CurrentDir,
    /// `funombi init <name>` - create or fill a subdirectory
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - Never overwrite an existing config file
/// - `NewDir`: an existing directory must be empty
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             This directory already holds an application.",
            config_path.display()
        );
    }

    if let InitMode::NewDir = mode
        && !is_empty(root)?
    {
        bail!(
            "Directory '{}' already exists and is not empty.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        );
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}
