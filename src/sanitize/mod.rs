//! Input sanitization for submitted fields.

mod filter;
mod rules;

pub use filter::{Filtered, SanitizedFields, Select, Source, filter};
pub use rules::Rule;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("invalid source: {0}")]
    InvalidSource(String),

    #[error("key `{0}` not found in the sanitized data")]
    KeyNotFound(String),
}
