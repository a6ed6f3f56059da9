//! Front controller HTTP server.
//!
//! Files under the public directory are served from disk; every other
//! request is dispatched through the router. Requests are handled one at a
//! time on the calling thread.

mod lifecycle;
mod path;
mod request;
mod response;

use crate::{
    asset::check_vital_directories,
    config::{AppConfig, cfg},
    controller,
    debug, log,
    router::{RouteError, Router},
};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    router: Router,
}

/// Verify the deployment, then bind the HTTP server.
pub fn bind_server(config: &AppConfig) -> Result<BoundServer> {
    check_vital_directories(config.get_root(), &config.locations, &config.locations.extra)?;
    let router = Router::with_defaults().context("Failed to build the route table")?;
    debug!("serve"; "routes: {}", router.routes().collect::<Vec<_>>().join(", "));

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}{}", addr, config.site.base_path());

    Ok(BoundServer {
        server,
        addr,
        router,
    })
}

impl BoundServer {
    /// Start the request loop (blocking until shutdown).
    ///
    /// Each request reads the configuration published by `init_config`.
    pub fn run(self) -> Result<()> {
        for request in self.server.incoming_requests() {
            let config = cfg();
            if let Err(e) = handle_request(request, &config, &self.router, self.addr) {
                log!("serve"; "request error: {e:#}");
            }
        }
        Ok(())
    }
}

/// Serve the application until Ctrl+C.
pub fn serve(config: &AppConfig) -> Result<()> {
    bind_server(config)?.run()
}

/// Handle a single HTTP request
fn handle_request(
    mut request: Request,
    config: &AppConfig,
    router: &Router,
    addr: SocketAddr,
) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = request.url().to_string();
    let method = request.method().clone();
    let Some(decoded) = path::decode_path(&url) else {
        debug!("request"; "{} {} -> 400 (undecodable path)", method, url);
        return respond_error(request, config, 400);
    };
    let base_path = config.site.base_path();

    let Some(route_path) = path::strip_base(&decoded, &base_path) else {
        debug!("request"; "{} {} -> 404 (outside {})", method, url, base_path);
        return respond_error(request, config, 404);
    };

    if let Some(file) = path::resolve_path(route_path, &config.public_root()) {
        debug!("request"; "{} {} -> file", method, url);
        return response::respond_file(request, &file);
    }

    let host = request::host(&request).unwrap_or_else(|| addr.to_string());
    let query = request::query_pairs(&url);
    let form = match request::form_pairs(&mut request, config.serve.max_form_bytes) {
        Ok(form) => form,
        Err(e) => {
            debug!("request"; "{} {} -> {}: {}", method, url, e.status(), e);
            return respond_error(request, config, e.status());
        }
    };
    let ctx = controller::Request {
        config,
        method: &method,
        host: &host,
        query: &query,
        form: &form,
    };

    match router.dispatch(route_path, &ctx) {
        Ok(page) => {
            debug!("request"; "{} {} -> {}", method, url, page.status);
            response::respond_page(request, page)
        }
        Err(e) => {
            let status = status_for(&e);
            if status == 404 {
                debug!("request"; "{} {} -> 404: {}", method, url, e);
            } else {
                log!("error"; "{} {}: {:#}", method, url, e);
            }
            respond_error(request, config, status)
        }
    }
}

/// Status code for a failed dispatch.
fn status_for(error: &anyhow::Error) -> u16 {
    match error.downcast_ref::<RouteError>() {
        Some(RouteError::NotFound(_) | RouteError::ActionNotFound { .. }) => 404,
        _ => 500,
    }
}

fn respond_error(request: Request, config: &AppConfig, status: u16) -> Result<()> {
    match controller::render_error(config, status) {
        Ok(page) => response::respond_page(request, page),
        Err(e) => {
            log!("error"; "failed to render error page: {:#}", e);
            let message = format!("{status} {}", controller::reason_phrase(status));
            response::respond_plain(request, status, &message)
        }
    }
}

/// Render a page in-process, without a socket. Used by tests.
#[cfg(test)]
fn render(config: &AppConfig, url: &str) -> controller::Page {
    let router = Router::with_defaults().unwrap();
    let method = tiny_http::Method::Get;
    let query = request::query_pairs(url);
    let ctx = controller::Request {
        config,
        method: &method,
        host: "localhost",
        query: &query,
        form: &[],
    };
    let decoded = path::decode_path(url).unwrap();
    let route_path = path::strip_base(&decoded, &config.site.base_path()).unwrap();
    router
        .dispatch(route_path, &ctx)
        .unwrap_or_else(|e| controller::render_error(config, status_for(&e)).unwrap())
}
