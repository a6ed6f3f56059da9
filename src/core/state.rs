//! Ctrl+C handling for the front controller.
//!
//! An interrupt that arrives before `serve` has bound a socket ends the
//! process. Once a server is registered, the interrupt raises the stop flag
//! and unblocks `incoming_requests` so the request loop returns normally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use tiny_http::Server;

struct Stop {
    requested: AtomicBool,
    server: OnceLock<Arc<Server>>,
}

impl Stop {
    const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            server: OnceLock::new(),
        }
    }

    /// Raise the flag. Returns whether a running server was unblocked.
    fn request(&self) -> bool {
        self.requested.store(true, Ordering::SeqCst);
        let Some(server) = self.server.get() else {
            return false;
        };
        crate::log!("serve"; "stopping");
        server.unblock();
        true
    }
}

static STOP: Stop = Stop::new();

/// Install the process-wide Ctrl+C handler.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if !STOP.request() {
            std::process::exit(0);
        }
    })
    .context("cannot install the Ctrl+C handler")
}

/// Hand the bound server to the Ctrl+C handler. Only the first call counts.
pub fn register_server(server: Arc<Server>) {
    let _ = STOP.server.set(server);
}

/// Whether Ctrl+C has been received.
pub fn is_shutdown() -> bool {
    STOP.requested.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_without_server() {
        let stop = Stop::new();
        assert!(!stop.request());
        assert!(stop.requested.load(Ordering::SeqCst));
    }

    #[test]
    fn test_stop_unblocks_request_loop() {
        let stop = Stop::new();
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let _ = stop.server.set(Arc::clone(&server));

        assert!(stop.request());
        assert!(server.incoming_requests().next().is_none());
    }
}
