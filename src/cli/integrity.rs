//! `digest` and `verify` commands.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::AppConfig;
use crate::integrity::{DigestAlgorithm, IntegrityChecker, IntegrityError, digest};
use crate::logger::{status_fail, status_ok};
use crate::utils::path::normalize_path;

/// Print `<hex>  <path>` for `file`.
pub fn digest_file(file: &Path, algorithm: &str) -> Result<()> {
    let algorithm: DigestAlgorithm = algorithm.parse()?;
    let hex = digest(file, algorithm)?;
    println!("{hex}  {}", file.display());
    Ok(())
}

/// Outcome for each file, in input order.
pub fn verify_report(
    checker: &IntegrityChecker,
    files: &[PathBuf],
) -> Vec<(PathBuf, Result<bool, IntegrityError>)> {
    files
        .iter()
        .map(|file| {
            let absolute = normalize_path(file);
            (file.clone(), checker.is_unmodified(&absolute))
        })
        .collect()
}

/// Verify every file against the manifest, failing if any is modified or
/// unknown.
pub fn verify_files(config: &AppConfig, files: &[PathBuf]) -> Result<()> {
    let checker = IntegrityChecker::from_config(config)?;
    crate::debug!("verify"; "manifest {} ({})", config.manifest_path().display(), checker.algorithm());

    let report = verify_report(&checker, files);
    let mut failed = 0;
    for (file, outcome) in &report {
        let name = file.display().to_string();
        match outcome {
            Ok(true) => status_ok(&format!("{name} unmodified")),
            Ok(false) => {
                failed += 1;
                status_fail(&format!("{name} modified"), "");
            }
            Err(e) => {
                failed += 1;
                status_fail(&name, &e.to_string());
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed verification", report.len());
    }
    Ok(())
}
