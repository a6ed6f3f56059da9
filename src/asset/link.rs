//! Asset link generation.
//!
//! Builds absolute URLs (scheme + host + mount path + file) for files under
//! the public root, optionally wrapped in the category's HTML tag. Output is
//! returned to the caller, nothing is written to the response directly.

use std::path::PathBuf;

use super::{AssetCategory, AssetError};
use crate::config::{AppConfig, LocationsConfig};
use crate::utils::path::is_plain_relative;

/// Request-scoped link builder.
#[derive(Debug, Clone)]
pub struct LinkEmitter<'a> {
    public_root: PathBuf,
    locations: &'a LocationsConfig,
    /// `scheme://host/base/`, always ending with `/`.
    site_url: String,
}

impl<'a> LinkEmitter<'a> {
    pub fn new(
        public_root: PathBuf,
        locations: &'a LocationsConfig,
        scheme: &str,
        host: &str,
        base_path: &str,
    ) -> Self {
        let base_path = base_path.trim_matches('/');
        let site_url = if base_path.is_empty() {
            format!("{scheme}{host}/")
        } else {
            format!("{scheme}{host}/{base_path}/")
        };
        Self {
            public_root,
            locations,
            site_url,
        }
    }

    /// Emitter for a request addressed to `host`.
    pub fn for_request(config: &'a AppConfig, host: &str) -> Self {
        Self::new(
            config.public_root(),
            &config.locations,
            config.session.scheme(),
            host,
            &config.site.base_path(),
        )
    }

    /// Absolute URL for a file relative to the public root.
    pub fn url_for(&self, file: &str) -> String {
        format!("{}{}", self.site_url, file.trim_start_matches('/'))
    }

    /// Emit a link to `file`.
    ///
    /// `category` is the asset directory name the file belongs to (as
    /// configured in `[locations]`). With `as_asset` the URL is wrapped in
    /// the category's tag, otherwise the bare URL is returned.
    pub fn emit(&self, file: &str, category: &str, as_asset: bool) -> Result<String, AssetError> {
        if !self.exists(file) {
            return Err(AssetError::FileNotFound(self.display_path(file)));
        }

        let url = self.url_for(file);
        if !as_asset {
            return Ok(url);
        }

        match self.locations.category_of(category) {
            Some(kind) => Ok(kind.render(&url)),
            None => Err(AssetError::UnsupportedCategory(self.display_path(file))),
        }
    }

    /// Emit the tag for `file`, deriving its category from the extension.
    pub fn emit_asset(&self, file: &str) -> Result<String, AssetError> {
        let category = AssetCategory::resolve(file)?;
        self.emit(file, self.locations.dir_for(category), true)
    }

    fn exists(&self, file: &str) -> bool {
        let file = file.trim_start_matches('/');
        is_plain_relative(file) && self.public_root.join(file).is_file()
    }

    fn display_path(&self, file: &str) -> String {
        format!(
            "{}/{}",
            self.locations.public_dir,
            file.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        locations: LocationsConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let public = dir.path().join("public");
            for (sub, file) in [
                ("stylesheets", "app.css"),
                ("javascripts", "app.js"),
                ("images", "logo.png"),
                ("fonts", "main.woff2"),
            ] {
                fs::create_dir_all(public.join(sub)).unwrap();
                fs::write(public.join(sub).join(file), "x").unwrap();
            }
            Self {
                dir,
                locations: LocationsConfig::default(),
            }
        }

        fn emitter(&self, scheme: &str, base: &str) -> LinkEmitter<'_> {
            LinkEmitter::new(
                self.dir.path().join("public"),
                &self.locations,
                scheme,
                "example.com",
                base,
            )
        }
    }

    #[test]
    fn test_emit_stylesheet_tag() {
        let fx = Fixture::new();
        let html = fx
            .emitter("http://", "")
            .emit("stylesheets/app.css", "stylesheets", true)
            .unwrap();
        assert_eq!(
            html,
            r#"<link href="http://example.com/stylesheets/app.css" rel="stylesheet" type="text/css">"#
        );
    }

    #[test]
    fn test_emit_script_tag_with_secure_scheme_and_prefix() {
        let fx = Fixture::new();
        let html = fx
            .emitter("https://", "/app/")
            .emit("javascripts/app.js", "javascripts", true)
            .unwrap();
        assert_eq!(
            html,
            r#"<script src="https://example.com/app/javascripts/app.js" type="text/javascript"></script>"#
        );
    }

    #[test]
    fn test_emit_image_is_bare_url() {
        let fx = Fixture::new();
        let url = fx
            .emitter("http://", "")
            .emit("images/logo.png", "images", true)
            .unwrap();
        assert_eq!(url, "http://example.com/images/logo.png");
    }

    #[test]
    fn test_emit_without_tag_returns_url_for_any_category() {
        let fx = Fixture::new();
        let emitter = fx.emitter("http://", "");
        assert_eq!(
            emitter.emit("stylesheets/app.css", "stylesheets", false).unwrap(),
            "http://example.com/stylesheets/app.css"
        );
        assert_eq!(
            emitter.emit("fonts/main.woff2", "fonts", false).unwrap(),
            "http://example.com/fonts/main.woff2"
        );
    }

    #[test]
    fn test_emit_missing_file_fails_regardless_of_category() {
        let fx = Fixture::new();
        let emitter = fx.emitter("http://", "");
        for (category, as_asset) in [
            ("stylesheets", true),
            ("javascripts", false),
            ("images", true),
            ("unknown", true),
        ] {
            let err = emitter
                .emit("stylesheets/missing.css", category, as_asset)
                .unwrap_err();
            assert!(
                matches!(err, AssetError::FileNotFound(ref p) if p == "public/stylesheets/missing.css"),
                "{category}"
            );
        }
    }

    #[test]
    fn test_emit_unknown_category_as_asset() {
        let fx = Fixture::new();
        let err = fx
            .emitter("http://", "")
            .emit("fonts/main.woff2", "fonts", true)
            .unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedCategory(_)));
    }

    #[test]
    fn test_emit_rejects_traversal() {
        let fx = Fixture::new();
        fs::write(fx.dir.path().join("secret.css"), "x").unwrap();
        let err = fx
            .emitter("http://", "")
            .emit("../secret.css", "stylesheets", true)
            .unwrap_err();
        assert!(matches!(err, AssetError::FileNotFound(_)));
    }

    #[test]
    fn test_emit_directory_is_not_a_file() {
        let fx = Fixture::new();
        let err = fx
            .emitter("http://", "")
            .emit("images", "images", false)
            .unwrap_err();
        assert!(matches!(err, AssetError::FileNotFound(_)));
    }

    #[test]
    fn test_emit_asset_derives_category() {
        let fx = Fixture::new();
        let emitter = fx.emitter("http://", "");
        assert!(
            emitter
                .emit_asset("javascripts/app.js")
                .unwrap()
                .starts_with("<script ")
        );
        assert!(matches!(
            emitter.emit_asset("fonts/main.woff2"),
            Err(AssetError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_url_for_strips_leading_slash() {
        let fx = Fixture::new();
        let emitter = fx.emitter("http://", "blog");
        assert_eq!(emitter.url_for(""), "http://example.com/blog/");
        assert_eq!(
            emitter.url_for("/images/logo.png"),
            "http://example.com/blog/images/logo.png"
        );
    }
}
