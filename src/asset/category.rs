//! Asset category definitions.
//!
//! A file's category is decided by its extension alone. Patterns are tried
//! in table order and the first match wins.

use std::sync::LazyLock;

use regex::Regex;

use super::AssetError;
use crate::utils::html::escape_attr;

/// Role of a static file in a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// `.css`, emitted as `<link rel="stylesheet">`.
    Stylesheet,
    /// `.js`, emitted as `<script>`.
    Script,
    /// `.jpg` `.jpeg` `.png` `.gif` `.ico`, emitted as a bare URL.
    Image,
}

/// Extension patterns in match order.
static PATTERNS: LazyLock<[(AssetCategory, Regex); 3]> = LazyLock::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("static asset pattern");
    [
        (AssetCategory::Stylesheet, re(r"(?i)^.*\.(css)$")),
        (AssetCategory::Script, re(r"(?i)^.*\.(js)$")),
        (AssetCategory::Image, re(r"(?i)^.*\.(jpg|jpeg|png|gif|ico)$")),
    ]
});

impl AssetCategory {
    /// All built-in categories, in vital-directory order.
    pub const ALL: [Self; 3] = [Self::Stylesheet, Self::Script, Self::Image];

    /// Directory name used when `[locations]` does not override it.
    pub const fn default_dir(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheets",
            Self::Script => "javascripts",
            Self::Image => "images",
        }
    }

    /// Resolve a file name to its category by extension.
    pub fn resolve(file_name: &str) -> Result<Self, AssetError> {
        PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(file_name))
            .map(|(category, _)| *category)
            .ok_or_else(|| AssetError::UnsupportedExtension(file_name.to_string()))
    }

    /// Wrap a URL in the markup for this category.
    pub fn render(self, url: &str) -> String {
        let url = escape_attr(url);
        match self {
            Self::Stylesheet => {
                format!(r#"<link href="{url}" rel="stylesheet" type="text/css">"#)
            }
            Self::Script => format!(r#"<script src="{url}" type="text/javascript"></script>"#),
            Self::Image => url.into_owned(),
        }
    }
}
