//! `[integrity]` section configuration.
//!
//! ```toml
//! [integrity]
//! manifest = "hashes.json"    # Known-good digests, relative to the root
//! algorithm = "sha512"        # sha224 | sha256 | sha384 | sha512 | blake3
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::integrity::DigestAlgorithm;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityConfig {
    /// Digest manifest path.
    pub manifest: PathBuf,
    /// Algorithm used by `verify`.
    pub algorithm: String,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("hashes.json"),
            algorithm: DigestAlgorithm::default().name().to_string(),
        }
    }
}

impl IntegrityConfig {
    pub const ALGORITHM: FieldPath = FieldPath::new("integrity.algorithm");

    /// Parsed algorithm, falling back to the default for invalid names.
    ///
    /// Invalid names are rejected by `validate` before this is used.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm.parse().unwrap_or_default()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.algorithm.parse::<DigestAlgorithm>().is_err() {
            diag.error_with_hint(
                Self::ALGORITHM,
                format!("unknown algorithm `{}`", self.algorithm),
                format!("supported: {}", DigestAlgorithm::names().join(", ")),
            );
        }
    }
}
