//! Controllers and the action registry.
//!
//! Actions are plain functions looked up by `(Controller, action)` after the
//! router has normalized the names.

mod errors;
mod home;

pub use errors::{reason_phrase, render_error};

use anyhow::Result;
use tiny_http::Method;

use crate::config::AppConfig;
use crate::router::RouteParams;

/// Request data handed to an action.
///
/// Query and form fields are decoded by the HTTP layer and passed in
/// explicitly.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub config: &'a AppConfig,
    pub method: &'a Method,
    /// `Host` header, `interface:port` when the client sent none.
    pub host: &'a str,
    pub query: &'a [(String, String)],
    pub form: &'a [(String, String)],
}

/// What an action sees: the request plus the matched route params.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub request: &'a Request<'a>,
    pub params: &'a RouteParams,
}

/// Rendered HTML page with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    pub fn with_status(status: u16, body: String) -> Self {
        Self { status, body }
    }
}

pub type Action = fn(&Context<'_>) -> Result<Page>;

/// Registered actions.
const ACTIONS: &[(&str, &str, Action)] = &[
    ("Home", "index", home::index),
    ("Home", "contact", home::contact),
    ("Errors", "forbidden", errors::forbidden),
    ("Errors", "notFound", errors::not_found),
    ("Errors", "internalServerError", errors::internal_server_error),
    ("Errors", "badGateway", errors::bad_gateway),
    ("Errors", "serviceUnavailable", errors::service_unavailable),
    ("Errors", "gatewayTimeout", errors::gateway_timeout),
];

/// Look up an action by normalized controller and action name.
pub fn find(controller: &str, action: &str) -> Option<Action> {
    ACTIONS
        .iter()
        .find(|(c, a, _)| *c == controller && *a == action)
        .map(|(_, _, handler)| *handler)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Request against `config` addressed to `example.com`.
    pub fn request<'a>(
        config: &'a AppConfig,
        method: &'a Method,
        form: &'a [(String, String)],
    ) -> Request<'a> {
        Request {
            config,
            method,
            host: "example.com",
            query: &[],
            form,
        }
    }
}
