//! Local modification detection.

use std::path::{Component, Path, PathBuf};

use subtle::ConstantTimeEq;

use super::{DigestAlgorithm, IntegrityError, Manifest, digest};
use crate::config::AppConfig;

/// Compares installed files against the manifest's known-good digests.
#[derive(Debug, Clone)]
pub struct IntegrityChecker {
    root: PathBuf,
    manifest: Manifest,
    algorithm: DigestAlgorithm,
}

impl IntegrityChecker {
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest, algorithm: DigestAlgorithm) -> Self {
        Self {
            root: root.into(),
            manifest,
            algorithm,
        }
    }

    /// Load the configured manifest for the installation at `config.root`.
    pub fn from_config(config: &AppConfig) -> Result<Self, IntegrityError> {
        let manifest = Manifest::load(&config.manifest_path())?;
        Ok(Self::new(
            config.get_root(),
            manifest,
            config.integrity.algorithm(),
        ))
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Manifest key prefix for a file: the root-relative path with
    /// separators replaced by `.`. The manifest appends the algorithm name.
    ///
    /// Relative paths are taken as already relative to the root.
    pub fn file_key(&self, path: &Path) -> Result<String, IntegrityError> {
        let outside = || IntegrityError::OutsideRoot(path.to_path_buf());

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root).map_err(|_| outside())?
        } else {
            path
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_string_lossy()),
                Component::CurDir => {}
                _ => return Err(outside()),
            }
        }
        if segments.is_empty() {
            return Err(outside());
        }

        Ok(segments.join("."))
    }

    /// Whether `path` still has the digest recorded in the manifest.
    ///
    /// Digests are compared in constant time.
    pub fn is_unmodified(&self, path: &Path) -> Result<bool, IntegrityError> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let current = digest(&absolute, self.algorithm)?;
        let expected = self.manifest.expected(&self.file_key(path)?, self.algorithm)?;

        Ok(current.as_bytes().ct_eq(expected.as_bytes()).into())
    }
}
