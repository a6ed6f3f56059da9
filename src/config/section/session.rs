//! `[session]` section configuration.
//!
//! ```toml
//! [session]
//! secured_cookies = true      # Site is served over HTTPS
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookies are only sent over TLS, so generated URLs use `https://`.
    pub secured_cookies: bool,
}

impl SessionConfig {
    /// URL scheme prefix for generated links.
    pub const fn scheme(&self) -> &'static str {
        if self.secured_cookies {
            "https://"
        } else {
            "http://"
        }
    }
}
