//! Page views.
//!
//! Each view is a plain HTML file under the configured views directory with
//! `__NAME__` placeholders. The defaults below are embedded in the binary,
//! written out by `init` and used whenever a view file is missing.

mod template;

pub use template::{Placeholders, Template, TemplateVars};

/// Variables shared by the `Home` pages.
pub struct PageVars<'a> {
    pub title: &'a str,
    pub base_path: &'a str,
    /// Rendered `<link>` tag.
    pub stylesheet: &'a str,
    /// Rendered `<script>` tag.
    pub script: &'a str,
}

impl<'a> PageVars<'a> {
    fn placeholders(&self) -> Placeholders<'a> {
        Placeholders::new()
            .text("TITLE", self.title)
            .text("BASE_PATH", self.base_path)
            .markup("STYLESHEET", self.stylesheet)
            .markup("SCRIPT", self.script)
    }
}

impl TemplateVars for PageVars<'_> {
    fn apply(&self, content: &str) -> String {
        self.placeholders().apply(content)
    }
}

/// Contact page: shared page variables plus the rendered submission.
pub struct ContactVars<'a> {
    pub page: PageVars<'a>,
    /// Pre-rendered, already escaped result block (empty on GET).
    pub result: &'a str,
}

impl TemplateVars for ContactVars<'_> {
    fn apply(&self, content: &str) -> String {
        self.page
            .placeholders()
            .markup("RESULT", self.result)
            .apply(content)
    }
}

/// Error page variables.
pub struct ErrorVars<'a> {
    pub title: &'a str,
    pub base_path: &'a str,
    pub status: u16,
    pub reason: &'a str,
}

impl TemplateVars for ErrorVars<'_> {
    fn apply(&self, content: &str) -> String {
        let status = self.status.to_string();
        Placeholders::new()
            .text("TITLE", self.title)
            .text("BASE_PATH", self.base_path)
            .text("STATUS", &status)
            .text("REASON", self.reason)
            .apply(content)
    }
}

pub const HOME_INDEX: Template<PageVars<'static>> =
    Template::new("Home/index.html", include_str!("default/Home/index.html"));

pub const HOME_CONTACT: Template<ContactVars<'static>> =
    Template::new("Home/contact.html", include_str!("default/Home/contact.html"));

pub const ERROR_PAGE: Template<ErrorVars<'static>> =
    Template::new("Errors/error.html", include_str!("default/Errors/error.html"));

/// Starter stylesheet written by `init`.
pub const APP_CSS: &str = include_str!("default/public/app.css");

/// Starter script written by `init`.
pub const APP_JS: &str = include_str!("default/public/app.js");

/// Every embedded view as `(relative path, content)`.
pub const DEFAULT_VIEWS: [(&str, &str); 3] = [
    (HOME_INDEX.name(), HOME_INDEX.fallback()),
    (HOME_CONTACT.name(), HOME_CONTACT.fallback()),
    (ERROR_PAGE.name(), ERROR_PAGE.fallback()),
];
