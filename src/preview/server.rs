//! Loopback HTTP server for the preview document.
//!
//! Lets a desktop webview or a regular browser load the current preview
//! with the same sandbox the iframe gets. The document is swapped in
//! place on every rebuild; optional static files (e.g. a local SDK build)
//! are served from an asset directory.
//!
//! ## Routes
//!
//! - `/` and `/index.html`: the current preview document
//! - `/assets/<path>`: files under the asset directory

use crate::constants::PREVIEW_IFRAME_SANDBOX;
use crate::error::{PlaygroundError, Result};
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::error;

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

/// Preview server running on its own thread until dropped
pub struct PreviewServer {
    addr: SocketAddr,
    document: Arc<RwLock<String>>,
    shutdown_flag: Arc<AtomicBool>,
    server_thread: Option<JoinHandle<()>>,
}

impl PreviewServer {
    /// Start on an ephemeral loopback port
    pub fn start(asset_dir: Option<PathBuf>) -> Result<Self> {
        let document = Arc::new(RwLock::new(String::new()));
        let document_clone = document.clone();
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let shutdown_flag_clone = shutdown_flag.clone();

        // Channel for server startup synchronization
        let (tx, rx) = mpsc::channel();

        let server_thread = thread::spawn(move || {
            let server = match Server::http("127.0.0.1:0") {
                Ok(s) => s,
                Err(e) => {
                    error!("Failed to start preview server: {}", e);
                    let _ = tx.send(Err(e.to_string()));
                    return;
                }
            };

            match server.server_addr().to_ip() {
                Some(addr) => {
                    let _ = tx.send(Ok(addr));
                }
                None => {
                    let _ = tx.send(Err("preview server has no IP address".to_string()));
                    return;
                }
            }

            loop {
                if shutdown_flag_clone.load(Ordering::Relaxed) {
                    break;
                }

                match server.recv_timeout(Duration::from_millis(100)) {
                    Ok(Some(request)) => {
                        Self::handle_request(request, &document_clone, asset_dir.as_deref());
                    }
                    Ok(None) => {}
                    Err(_) => break,
                }
            }
        });

        // Wait for server to start with timeout
        let addr = match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(Ok(addr)) => addr,
            Ok(Err(e)) => {
                return Err(PlaygroundError::Preview(format!("Failed to start server: {}", e)));
            }
            Err(_) => return Err(PlaygroundError::Preview("Server startup timeout".to_string())),
        };

        tracing::info!("Preview server listening on {}", addr);

        Ok(Self {
            addr,
            document,
            shutdown_flag,
            server_thread: Some(server_thread),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL of the preview document
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Base URL for files in the asset directory
    pub fn assets_url(&self) -> String {
        format!("http://{}/assets/", self.addr)
    }

    /// Replace the served document
    pub fn set_document(&self, document: &str) {
        *self.document.write() = document.to_string();
    }

    fn handle_request(request: Request, document: &RwLock<String>, asset_dir: Option<&Path>) {
        let path = request.url().split('?').next().unwrap_or("/").to_string();

        match path.as_str() {
            "/" | "/index.html" => {
                let body = document.read().clone();
                let mut response = Response::from_string(body);
                if let Some(h) = create_header(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]) {
                    response = response.with_header(h);
                }
                let csp = format!("sandbox {}", PREVIEW_IFRAME_SANDBOX);
                if let Some(h) = create_header(&b"Content-Security-Policy"[..], csp.as_bytes()) {
                    response = response.with_header(h);
                }
                let _ = request.respond(response);
            }
            _ => match (path.strip_prefix("/assets/"), asset_dir) {
                (Some(relative), Some(dir)) => Self::serve_asset(request, dir, relative),
                _ => {
                    let _ = request.respond(Response::empty(StatusCode(404)));
                }
            },
        }
    }

    fn serve_asset(request: Request, dir: &Path, relative: &str) {
        let decoded = urlencoding::decode(relative)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| relative.to_string());
        let relative = Path::new(&decoded);

        // Only plain descending paths are served
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            let _ = request.respond(Response::empty(StatusCode(403)));
            return;
        }

        let path = dir.join(relative);
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(_) => {
                let _ = request.respond(Response::empty(StatusCode(404)));
                return;
            }
        };

        let mime = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("js") | Some("mjs") => "text/javascript",
            Some("css") => "text/css",
            Some("html") => "text/html",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("woff2") => "font/woff2",
            Some("woff") => "font/woff",
            _ => "application/octet-stream",
        };

        let mut response = Response::from_data(data);
        if let Some(h) = create_header(&b"Content-Type"[..], mime.as_bytes()) {
            response = response.with_header(h);
        }
        let _ = request.respond(response);
    }
}

impl Drop for PreviewServer {
    fn drop(&mut self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }
}
