//! Route templates.
//!
//! A template is literal text with `{name}` placeholders, which capture
//! `[a-z-]+`, or `{name:REGEX}` placeholders capturing REGEX. The compiled
//! pattern is anchored and case-insensitive.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use super::RouteError;

/// Captured and fixed route variables (`controller`, `action`, ...).
pub type RouteParams = FxHashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z_]+)(?::([^}]+))?\}").expect("static placeholder pattern")
});

/// A compiled route with its fixed parameters.
#[derive(Debug, Clone)]
pub struct Route {
    template: String,
    pattern: Regex,
    params: RouteParams,
}

impl Route {
    pub fn new(template: &str, params: RouteParams) -> Result<Self, RouteError> {
        let pattern = Regex::new(&compile(template)).map_err(|source| {
            RouteError::InvalidPattern {
                route: template.to_string(),
                source,
            }
        })?;
        Ok(Self {
            template: template.to_string(),
            pattern,
            params,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fixed params overlaid with the captures, if `url` matches.
    pub fn matches(&self, url: &str) -> Option<RouteParams> {
        let captures = self.pattern.captures(url)?;
        let mut params = self.params.clone();
        for name in self.pattern.capture_names().flatten() {
            if let Some(value) = captures.name(name) {
                params.insert(name.to_string(), value.as_str().to_string());
            }
        }
        Some(params)
    }
}

/// Translate a route template into regex source.
fn compile(template: &str) -> String {
    let template = template.trim_matches('/');
    let mut out = String::from("(?i)^");
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&regex::escape(&template[last..whole.start()]));
        let body = caps.get(2).map_or("[a-z-]+", |m| m.as_str());
        out.push_str(&format!("(?P<{}>{})", name.as_str(), body));
        last = whole.end();
    }
    out.push_str(&regex::escape(&template[last..]));
    out.push('$');
    out
}

/// `my-posts` -> `MyPosts`
pub fn to_studly_caps(name: &str) -> String {
    name.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `add-new` -> `addNew`
pub fn to_camel_case(name: &str) -> String {
    let studly = to_studly_caps(name);
    let mut chars = studly.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
