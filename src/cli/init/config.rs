//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Generate funombi.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Funombi configuration file (v{version})

[site]
title = "Funombi"           # Shown on every page
path_prefix = ""            # URL path the app is mounted under, e.g. "app"

[session]
secured_cookies = false     # true: generated links use https://

[locations]
public_dir = "public"       # Web root served over HTTP
stylesheets = "stylesheets" # public/<stylesheets>
javascripts = "javascripts" # public/<javascripts>
images = "images"           # public/<images>
views = "views"             # Page templates
extra = []                  # Additional vital directories under public_dir

[serve]
interface = "127.0.0.1"     # 0.0.0.0 to listen on every interface
port = 8080
max_form_bytes = 1048576    # POST bodies are truncated past this size

[integrity]
manifest = "hashes.json"    # Known-good digests, relative to this file
algorithm = "sha512"        # sha224 | sha256 | sha384 | sha512 | blake3
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write the default configuration file
pub fn write_config(path: &Path) -> Result<()> {
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
