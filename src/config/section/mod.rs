//! Configuration section definitions.
//!
//! Each module corresponds to a section in `funombi.toml`:
//!
//! | Module      | TOML Section    | Purpose                            |
//! |-------------|-----------------|------------------------------------|
//! | `integrity` | `[integrity]`   | Digest manifest and algorithm      |
//! | `locations` | `[locations]`   | Public root and asset directories  |
//! | `serve`     | `[serve]`       | HTTP server                        |
//! | `session`   | `[session]`     | Secure scheme flag                 |
//! | `site`      | `[site]`        | Title and mount path               |

mod integrity;
mod locations;
mod serve;
mod session;
mod site;

pub use integrity::IntegrityConfig;
pub use locations::LocationsConfig;
pub use serve::ServeConfig;
pub use session::SessionConfig;
pub use site::SiteConfig;
