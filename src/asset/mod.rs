//! Static asset resolution and link generation.

mod category;
mod dirs;
mod link;

pub use category::AssetCategory;
pub use dirs::{AssetDirectorySet, check_vital_directories};
pub use link::LinkEmitter;

use thiserror::Error;

/// Asset lookup failures. All of them point at a deployment or
/// programming mistake, none is transient.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("the extension of `{0}` is not accepted")]
    UnsupportedExtension(String),

    #[error("the (vital) directory `{0}` is not found")]
    MissingDirectory(String),

    #[error("`{0}` is not a directory name relative to the public root")]
    InvalidDirectory(String),

    #[error("`{0}` is not found")]
    FileNotFound(String),

    #[error("impossible to create an HTML object for `{0}`")]
    UnsupportedCategory(String),
}
