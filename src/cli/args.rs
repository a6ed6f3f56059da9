//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::{net::IpAddr, path::PathBuf};

/// Funombi MVC scaffold CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: funombi.toml)
    #[arg(short = 'C', long, global = true, default_value = "funombi.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new application skeleton
    #[command(visible_alias = "i")]
    Init {
        /// Application directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Start the front controller HTTP server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check that every vital public directory exists
    #[command(visible_alias = "c")]
    Check {
        /// Extra directories under the public directory that must exist
        #[arg(value_name = "DIR")]
        extra: Vec<String>,
    },

    /// Print the digest of a file
    Digest {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Digest algorithm (sha224, sha256, sha384, sha512, blake3)
        #[arg(short, long, default_value = "sha512")]
        algorithm: String,
    },

    /// Compare files against the integrity manifest
    #[command(visible_alias = "v")]
    Verify {
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },

    /// Sanitize a JSON object read from stdin
    Sanitize {
        /// Only return these fields (comma-separated). A single key prints
        /// its value alone.
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Cli {
    /// Whether the command operates on an installed application and
    /// therefore needs its config file.
    pub const fn needs_project(&self) -> bool {
        matches!(
            self.command,
            Commands::Serve { .. } | Commands::Check { .. } | Commands::Verify { .. }
        )
    }
}
