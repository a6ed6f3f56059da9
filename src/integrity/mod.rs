//! File integrity checks against a manifest of known-good digests.

mod check;
mod digest;
mod manifest;

pub use check::IntegrityChecker;
pub use digest::{DigestAlgorithm, digest};
pub use manifest::Manifest;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("no manifest entry `{0}`")]
    ManifestKeyNotFound(String),

    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed manifest `{0}`")]
    Manifest(PathBuf, #[source] serde_json::Error),

    #[error("unsupported digest algorithm `{0}`")]
    UnsupportedAlgorithm(String),

    #[error("`{0}` is outside the installation root")]
    OutsideRoot(PathBuf),
}
