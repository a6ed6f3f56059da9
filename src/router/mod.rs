//! Front controller routing.
//!
//! Maps a request path to a `(Controller, action)` pair and invokes the
//! registered action. Routes are tried in insertion order; the first match
//! wins.

mod route;

pub use route::{Route, RouteParams, to_camel_case, to_studly_caps};

use anyhow::Result;
use thiserror::Error;

use crate::controller::{self, Context, Page, Request};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route `{route}`")]
    InvalidPattern {
        route: String,
        #[source]
        source: regex::Error,
    },

    #[error("no route matched `{0}`")]
    NotFound(String),

    #[error("action `{action}` not found in controller `{controller}`")]
    ActionNotFound { controller: String, action: String },
}

/// Resolved dispatch target with normalized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub controller: String,
    pub action: String,
    pub params: RouteParams,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with the application's route table.
    pub fn with_defaults() -> Result<Self, RouteError> {
        let mut router = Self::new();
        router.add("", &[("controller", "Home"), ("action", "index")])?;
        router.add("contact", &[("controller", "Home"), ("action", "contact")])?;
        router.add("403", &[("controller", "Errors"), ("action", "forbidden")])?;
        router.add("404", &[("controller", "Errors"), ("action", "notFound")])?;
        router.add("500", &[("controller", "Errors"), ("action", "internalServerError")])?;
        router.add("502", &[("controller", "Errors"), ("action", "badGateway")])?;
        router.add("503", &[("controller", "Errors"), ("action", "serviceUnavailable")])?;
        router.add("504", &[("controller", "Errors"), ("action", "gatewayTimeout")])?;
        Ok(router)
    }

    /// Append a route with fixed params.
    pub fn add(&mut self, template: &str, params: &[(&str, &str)]) -> Result<(), RouteError> {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.routes.push(Route::new(template, params)?);
        Ok(())
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(Route::template)
    }

    /// Params of the first route matching `url`.
    pub fn match_url(&self, url: &str) -> Option<RouteParams> {
        self.routes.iter().find_map(|route| route.matches(url))
    }

    /// Match `url` and normalize the controller and action names.
    ///
    /// `public_dir` is the web root name; a leading `public_dir/` segment
    /// is removed before matching.
    pub fn resolve(&self, url: &str, public_dir: &str) -> Result<Target, RouteError> {
        let path = normalize_url(url, public_dir);
        let params = self
            .match_url(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;

        let name = |key: &str| params.get(key).map(String::as_str).unwrap_or_default();
        let controller = to_studly_caps(name("controller"));
        let action = to_camel_case(name("action"));

        Ok(Target {
            controller,
            action,
            params,
        })
    }

    /// Resolve `url` and run the matched action.
    pub fn dispatch(&self, url: &str, request: &Request<'_>) -> Result<Page> {
        let target = self.resolve(url, &request.config.locations.public_dir)?;
        let action = controller::find(&target.controller, &target.action).ok_or_else(|| {
            RouteError::ActionNotFound {
                controller: target.controller.clone(),
                action: target.action.clone(),
            }
        })?;

        crate::debug!("route"; "{} -> {}::{}", url, target.controller, target.action);
        action(&Context {
            request,
            params: &target.params,
        })
    }
}

/// Route path for a raw request URL.
///
/// Drops the query string (after `?`, or after the first `&` when the
/// first `&`-separated part is itself a `key=value` pair), surrounding
/// slashes and a leading `public_dir/` segment.
fn normalize_url<'a>(url: &'a str, public_dir: &str) -> &'a str {
    let url = url.split('?').next().unwrap_or_default();
    let url = match url.split('&').next() {
        Some(first) if first.contains('=') => "",
        Some(first) => first,
        None => "",
    };

    let url = url.trim_matches('/');
    let public_dir = public_dir.trim_matches('/');
    if public_dir.is_empty() {
        return url;
    }
    match url.strip_prefix(public_dir) {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::request;
    use std::fs;
    use tempfile::TempDir;
    use tiny_http::Method;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("/", "public"), "");
        assert_eq!(normalize_url("/contact/", "public"), "contact");
        assert_eq!(normalize_url("/contact?x=1", "public"), "contact");
        assert_eq!(normalize_url("posts/index&page=1", "public"), "posts/index");
        assert_eq!(normalize_url("page=1&sort=asc", "public"), "");
        assert_eq!(normalize_url("/public/404", "public"), "404");
        assert_eq!(normalize_url("public", "public"), "");
        assert_eq!(normalize_url("publications", "public"), "publications");
    }

    #[test]
    fn test_default_table() {
        let router = Router::with_defaults().unwrap();
        let templates: Vec<_> = router.routes().collect();
        assert_eq!(
            templates,
            ["", "contact", "403", "404", "500", "502", "503", "504"]
        );

        let cases = [
            ("/", "Home", "index"),
            ("/contact", "Home", "contact"),
            ("/403", "Errors", "forbidden"),
            ("/404", "Errors", "notFound"),
            ("/500", "Errors", "internalServerError"),
            ("/502", "Errors", "badGateway"),
            ("/503", "Errors", "serviceUnavailable"),
            ("/504", "Errors", "gatewayTimeout"),
        ];
        for (url, controller, action) in cases {
            let target = router.resolve(url, "public").unwrap();
            assert_eq!(target.controller, controller, "{url}");
            assert_eq!(target.action, action, "{url}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let mut router = Router::new();
        router
            .add("{controller}/{action}", &[])
            .unwrap();
        router
            .add("admin/users", &[("controller", "Users"), ("action", "list")])
            .unwrap();

        let target = router.resolve("admin/users", "public").unwrap();
        assert_eq!(target.controller, "Admin");
        assert_eq!(target.action, "users");
    }

    #[test]
    fn test_case_insensitive_and_names_normalized() {
        let mut router = Router::new();
        router.add("{controller}/{action}", &[]).unwrap();
        let target = router.resolve("/blog-posts/SHOW-all", "public").unwrap();
        assert_eq!(target.controller, "BlogPosts");
        assert_eq!(target.action, "sHOWAll");
        assert_eq!(target.params["controller"], "blog-posts");
    }

    #[test]
    fn test_unmatched_url() {
        let router = Router::with_defaults().unwrap();
        let err = router.resolve("/nope", "public").unwrap_err();
        assert!(matches!(err, RouteError::NotFound(ref p) if p == "nope"));
    }

    #[test]
    fn test_dispatch_runs_action() {
        let dir = TempDir::new().unwrap();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Get;
        let req = request(&config, &method, &[]);

        let router = Router::with_defaults().unwrap();
        let page = router.dispatch("/public/404", &req).unwrap();
        assert_eq!(page.status, 404);
    }

    #[test]
    fn test_dispatch_unknown_action() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        let config = crate::config::test_config_at(dir.path());
        let method = Method::Get;
        let req = request(&config, &method, &[]);

        let mut router = Router::new();
        router
            .add("about", &[("controller", "Home"), ("action", "about")])
            .unwrap();
        let err = router.dispatch("/about", &req).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RouteError>(),
            Some(RouteError::ActionNotFound { controller, action })
                if controller == "Home" && action == "about"
        ));
    }
}
