//! `[serve]` section configuration.
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # 0.0.0.0 to listen on every interface
//! port = 8080
//! max_form_bytes = 1048576    # POST bodies are truncated past this size
//! ```

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,
    pub port: u16,
    /// Largest urlencoded form body read from a request.
    pub max_form_bytes: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            max_form_bytes: 1024 * 1024,
        }
    }
}

impl ServeConfig {
    pub const MAX_FORM_BYTES: FieldPath = FieldPath::new("serve.max_form_bytes");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_form_bytes == 0 {
            diag.error(Self::MAX_FORM_BYTES, "must be greater than zero");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::net::Ipv6Addr;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 3000");
        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.serve.port, 3000);
        assert_eq!(config.serve.max_form_bytes, 1024 * 1024);
    }

    #[test]
    fn test_serve_config_ipv6() {
        let config = test_parse_config("[serve]\ninterface = \"::1\"");
        assert_eq!(config.serve.interface, IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_zero_form_limit_rejected() {
        let config = test_parse_config("[serve]\nmax_form_bytes = 0");
        let mut diag = ConfigDiagnostics::new();
        config.serve.validate(&mut diag);
        assert_eq!(diag.fields().collect::<Vec<_>>(), [ServeConfig::MAX_FORM_BYTES]);
    }
}
