//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod integrity;
pub mod sanitize;
pub mod serve;

pub use args::{Cli, Commands};
