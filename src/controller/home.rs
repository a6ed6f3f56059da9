//! `Home` controller.

use anyhow::Result;
use tiny_http::Method;

use super::{Context, Page};
use crate::asset::{AssetCategory, LinkEmitter};
use crate::config::AppConfig;
use crate::sanitize::{self, Filtered, Rule, SanitizeError, SanitizedFields, Select, Source};
use crate::utils::html::escape;
use crate::view::{ContactVars, HOME_CONTACT, HOME_INDEX, PageVars};

const STYLESHEET: &str = "app.css";
const SCRIPT: &str = "app.js";

/// Asset tags every `Home` page links.
struct PageAssets {
    base_path: String,
    stylesheet: String,
    script: String,
}

impl PageAssets {
    fn emit(config: &AppConfig, host: &str) -> Result<Self> {
        let links = LinkEmitter::for_request(config, host);
        let tag_for = |category: AssetCategory, file: &str| {
            let dir = config.locations.dir_for(category);
            links.emit_asset(&format!("{dir}/{file}"))
        };
        Ok(Self {
            base_path: config.site.base_path(),
            stylesheet: tag_for(AssetCategory::Stylesheet, STYLESHEET)?,
            script: tag_for(AssetCategory::Script, SCRIPT)?,
        })
    }

    fn vars<'a>(&'a self, config: &'a AppConfig) -> PageVars<'a> {
        PageVars {
            title: &config.site.title,
            base_path: &self.base_path,
            stylesheet: &self.stylesheet,
            script: &self.script,
        }
    }
}

/// Show the index page.
pub fn index(ctx: &Context<'_>) -> Result<Page> {
    let config = ctx.request.config;
    let assets = PageAssets::emit(config, ctx.request.host)?;
    let body = HOME_INDEX.render(&config.views_root(), &assets.vars(config))?;
    Ok(Page::ok(body))
}

/// Show the contact form, and the cleaned submission on POST.
pub fn contact(ctx: &Context<'_>) -> Result<Page> {
    let config = ctx.request.config;
    let assets = PageAssets::emit(config, ctx.request.host)?;

    let result = match ctx.request.method {
        Method::Post => match sanitize::filter(Source::Form(ctx.request.form), Select::All) {
            Ok(Filtered::Fields(fields)) => render_submission(&fields),
            Ok(Filtered::Value(_)) => String::new(),
            Err(SanitizeError::InvalidSource(_)) => {
                r#"<p class="notice">Nothing was submitted.</p>"#.to_string()
            }
            Err(e) => return Err(e.into()),
        },
        _ => String::new(),
    };

    let vars = ContactVars {
        page: assets.vars(config),
        result: &result,
    };
    let body = HOME_CONTACT.render(&config.views_root(), &vars)?;
    Ok(Page::ok(body))
}

/// Definition list of the sanitized fields. Rejected values show as
/// "invalid".
fn render_submission(fields: &SanitizedFields) -> String {
    let mut out = String::from("<dl class=\"submission\">\n");
    for (name, value) in fields.iter() {
        let shown = match value {
            // already escaped by the text rule
            Some(v) if Rule::for_field(name) == Rule::Text => v.to_string(),
            Some(v) => escape(v).into_owned(),
            None => "<em>invalid</em>".to_string(),
        };
        out.push_str(&format!("  <dt>{}</dt><dd>{shown}</dd>\n", escape(name)));
    }
    out.push_str("</dl>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::request;
    use crate::router::RouteParams;
    use std::fs;
    use tempfile::TempDir;

    fn installation() -> TempDir {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(public.join("stylesheets")).unwrap();
        fs::create_dir_all(public.join("javascripts")).unwrap();
        fs::write(public.join("stylesheets/app.css"), "body{}").unwrap();
        fs::write(public.join("javascripts/app.js"), "").unwrap();
        dir
    }

    fn form(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_index_links_assets() {
        let dir = installation();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Get;
        let req = request(&config, &method, &[]);
        let params = RouteParams::default();

        let page = index(&Context { request: &req, params: &params }).unwrap();
        assert_eq!(page.status, 200);
        assert!(page.body.contains(
            r#"<link href="http://example.com/stylesheets/app.css" rel="stylesheet" type="text/css">"#
        ));
        assert!(page.body.contains(r#"<script src="http://example.com/javascripts/app.js""#));
        assert!(page.body.contains("<title>Funombi</title>"));
    }

    #[test]
    fn test_index_fails_without_stylesheet() {
        let dir = installation();
        fs::remove_file(dir.path().join("public/stylesheets/app.css")).unwrap();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Get;
        let req = request(&config, &method, &[]);
        let params = RouteParams::default();

        let err = index(&Context { request: &req, params: &params }).unwrap_err();
        assert!(err.downcast_ref::<crate::asset::AssetError>().is_some());
    }

    #[test]
    fn test_contact_get_shows_form_only() {
        let dir = installation();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Get;
        let req = request(&config, &method, &[]);
        let params = RouteParams::default();

        let page = contact(&Context { request: &req, params: &params }).unwrap();
        assert!(page.body.contains("<form method=\"post\""));
        assert!(!page.body.contains("submission"));
    }

    #[test]
    fn test_contact_post_sanitizes_form() {
        let dir = installation();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Post;
        let fields = form(&[
            ("name", "<b>Ada</b> & co"),
            ("email", "not an email"),
            ("website_url", "http://ex ample.com/\"x\""),
        ]);
        let req = request(&config, &method, &fields);
        let params = RouteParams::default();

        let page = contact(&Context { request: &req, params: &params }).unwrap();
        assert!(page.body.contains("<dt>name</dt><dd>Ada &amp; co</dd>"));
        assert!(page.body.contains("<dt>email</dt><dd><em>invalid</em></dd>"));
        assert!(
            page.body
                .contains("<dt>website_url</dt><dd>http://example.com/&quot;x&quot;</dd>")
        );
    }

    #[test]
    fn test_contact_post_empty_form() {
        let dir = installation();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Post;
        let req = request(&config, &method, &[]);
        let params = RouteParams::default();

        let page = contact(&Context { request: &req, params: &params }).unwrap();
        assert!(page.body.contains("Nothing was submitted."));
    }
}
