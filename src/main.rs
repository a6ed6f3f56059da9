//! Funombi - a minimal MVC scaffold with a front controller, asset links,
//! file integrity checks and input sanitization.

mod asset;
mod cli;
mod config;
mod controller;
mod core;
mod integrity;
mod logger;
mod router;
mod sanitize;
mod utils;
mod view;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{AppConfig, init_config};

fn main() -> Result<()> {
    // Ctrl+C must be wired before the server starts blocking
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(AppConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { name } => cli::init::new_app(&config, name.is_some()),
        Commands::Serve { .. } => cli::serve::serve(&config),
        Commands::Check { extra } => cli::check::check_app(&config, extra),
        Commands::Digest { file, algorithm } => cli::integrity::digest_file(file, algorithm),
        Commands::Verify { files } => cli::integrity::verify_files(&config, files),
        Commands::Sanitize { keys, pretty } => cli::sanitize::run(keys.as_deref(), *pretty),
    }
}
