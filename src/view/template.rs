//! Template types for typed variable injection.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::html::escape;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// View with typed variable injection.
///
/// `name` is the path under the views directory. When that file does not
/// exist the embedded `fallback` is rendered instead.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    name: &'static str,
    fallback: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            fallback,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Template source, preferring the file under `views_root`.
    pub fn source(&self, views_root: &Path) -> Result<Cow<'static, str>> {
        let path = views_root.join(self.name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Cow::Owned(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Cow::Borrowed(self.fallback)),
            Err(e) => Err(e).with_context(|| format!("Failed to read view '{}'", path.display())),
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, views_root: &Path, vars: &V) -> Result<String> {
        Ok(vars.apply(&self.source(views_root)?))
    }
}

/// `__NAME__` substitutions, escaped unless added as markup.
#[derive(Debug, Default)]
pub struct Placeholders<'a> {
    values: Vec<(&'static str, Cow<'a, str>)>,
}

impl<'a> Placeholders<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text, HTML-escaped on insertion.
    pub fn text(mut self, name: &'static str, value: &'a str) -> Self {
        self.values.push((name, escape(value)));
        self
    }

    /// Trusted markup, inserted verbatim.
    pub fn markup(mut self, name: &'static str, value: &'a str) -> Self {
        self.values.push((name, Cow::Borrowed(value)));
        self
    }

    pub fn apply(&self, content: &str) -> String {
        let mut out = content.to_string();
        for (name, value) in &self.values {
            out = out.replace(&format!("__{name}__"), value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct GreetVars<'a> {
        who: &'a str,
    }

    impl TemplateVars for GreetVars<'_> {
        fn apply(&self, content: &str) -> String {
            Placeholders::new().text("WHO", self.who).apply(content)
        }
    }

    const GREET: Template<GreetVars<'static>> = Template::new("greet.html", "<p>Hi __WHO__</p>");

    #[test]
    fn test_fallback_when_view_missing() {
        let dir = TempDir::new().unwrap();
        let html = GREET.render(dir.path(), &GreetVars { who: "Ada" }).unwrap();
        assert_eq!(html, "<p>Hi Ada</p>");
    }

    #[test]
    fn test_view_on_disk_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("greet.html"), "<h1>__WHO__</h1>").unwrap();
        let html = GREET.render(dir.path(), &GreetVars { who: "Ada" }).unwrap();
        assert_eq!(html, "<h1>Ada</h1>");
    }

    #[test]
    fn test_text_is_escaped_markup_is_not() {
        let out = Placeholders::new()
            .text("A", "<b>")
            .markup("B", "<i>ok</i>")
            .apply("__A__ __B__ __A__");
        assert_eq!(out, "&lt;b&gt; <i>ok</i> &lt;b&gt;");
    }

    #[test]
    fn test_missing_view_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let html = GREET.render(dir.path(), &GreetVars { who: "&" }).unwrap();
        assert_eq!(html, "<p>Hi &amp;</p>");
    }
}
