//! HTTP response handlers.

use crate::controller::Page;
use crate::utils::mime::{self, HTML, PLAIN};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a static file from the public directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::content_type(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with a rendered page.
pub fn respond_page(request: Request, page: Page) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, page.status, HTML);
    }
    send_body(request, page.status, HTML, page.body.into_bytes())
}

/// Plain-text fallback when even the error page cannot be rendered.
pub fn respond_plain(request: Request, status: u16, message: &str) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, PLAIN);
    }
    send_body(request, status, PLAIN, message.as_bytes().to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    respond_plain(request, 503, "503 Service Unavailable")
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header `{key}: {value}`"))
}
