//! `Errors` controller: one action per HTTP error status.

use anyhow::Result;

use super::{Context, Page};
use crate::config::AppConfig;
use crate::view::{ERROR_PAGE, ErrorVars};

pub fn forbidden(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 403)
}

pub fn not_found(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 404)
}

pub fn internal_server_error(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 500)
}

pub fn bad_gateway(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 502)
}

pub fn service_unavailable(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 503)
}

pub fn gateway_timeout(ctx: &Context<'_>) -> Result<Page> {
    render_error(ctx.request.config, 504)
}

pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        413 => "Content Too Large",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}

/// Render the error page for `status`.
///
/// Also used by the server when dispatching itself fails.
pub fn render_error(config: &AppConfig, status: u16) -> Result<Page> {
    let base_path = config.site.base_path();
    let vars = ErrorVars {
        title: &config.site.title,
        base_path: &base_path,
        status,
        reason: reason_phrase(status),
    };
    let body = ERROR_PAGE.render(&config.views_root(), &vars)?;
    Ok(Page::with_status(status, body))
}
