//! `check` command: verify the vital public directories.

use anyhow::Result;

use crate::asset::{AssetDirectorySet, AssetError};
use crate::config::AppConfig;
use crate::logger::{status_fail, status_ok};
use crate::utils::path::is_plain_relative;

/// Config extras followed by the command-line ones, without duplicates.
///
/// Command-line extras get the same relative-path rule as `locations.extra`.
fn merged_extras(config: &AppConfig, extra: &[String]) -> Result<Vec<String>, AssetError> {
    let mut all = config.locations.extra.clone();
    for dir in extra {
        if !is_plain_relative(dir) {
            return Err(AssetError::InvalidDirectory(dir.clone()));
        }
        if !all.contains(dir) {
            all.push(dir.clone());
        }
    }
    Ok(all)
}

/// Report each vital directory, stopping at the first missing one.
pub fn check_app(config: &AppConfig, extra: &[String]) -> Result<()> {
    let extras = merged_extras(config, extra)?;
    let set = AssetDirectorySet::scan(config.get_root(), &config.locations, &extras);
    let public_dir = &config.locations.public_dir;

    for (name, exists) in set.entries() {
        let path = format!("{public_dir}/{name}");
        if !exists {
            status_fail(&path, "not found");
            break;
        }
        status_ok(&path);
    }

    set.ensure_all()?;
    crate::log!("check"; "all vital directories are present");
    Ok(())
}
