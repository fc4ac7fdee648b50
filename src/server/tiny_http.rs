//! tiny_http server adapter
//!
//! Translates HTTP requests into report-accessor resolutions and streams the
//! resolved files back. One blocking accept loop; file-serving requests are
//! independent and read-only.

use std::fs::File;
use std::path::Path;

use tiny_http::{Header, Method, Request, Response, ResponseBox, Server, StatusCode};

use crate::report::ServeError;

use super::ServerConfig;

/// Run the report server until the process is stopped.
///
/// Binds `config.addr` and serves
/// `GET /<build>/golang-coverage-report/<path>` from the builds directory.
pub fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let server = Server::http(&config.addr)
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", config.addr))?;
    log::info!(
        "serving coverage reports from {} on http://{}",
        config.builds_dir.display(),
        config.addr
    );

    for request in server.incoming_requests() {
        let response = handle_request(config, &request);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

/// Map one request to a response
fn handle_request(config: &ServerConfig, request: &Request) -> ResponseBox {
    let url = request.url().to_string();
    log::debug!("{} {url}", request.method());

    if *request.method() != Method::Get {
        return text_response("method not allowed", 405, config);
    }

    match super::resolve_request(&config.builds_dir, &url) {
        Ok(path) => file_response(&path, config),
        Err(e) => {
            log::debug!("{url}: {e}");
            text_response(&e.to_string(), e.status_code(), config)
        },
    }
}

/// Stream a resolved file with its content type
fn file_response(path: &Path, config: &ServerConfig) -> ResponseBox {
    match File::open(path) {
        Ok(file) => {
            let mut response = Response::from_file(file)
                .with_header(Header::from_bytes("Content-Type", content_type(path)).unwrap());
            if let Some(policy) = csp_header(config) {
                response = response.with_header(policy);
            }
            response.boxed()
        },
        Err(e) => {
            log::warn!("failed to open {}: {e}", path.display());
            text_response("failed to read file", 500, config)
        },
    }
}

/// Create a plain-text response with a status code
fn text_response(message: &str, status: u16, config: &ServerConfig) -> ResponseBox {
    let mut response = Response::from_string(message).with_status_code(StatusCode(status));
    if let Some(policy) = csp_header(config) {
        response = response.with_header(policy);
    }
    response.boxed()
}

fn csp_header(config: &ServerConfig) -> Option<Header> {
    config
        .content_security_policy
        .as_ref()
        .filter(|policy| !policy.is_empty())
        .and_then(|policy| Header::from_bytes("Content-Security-Policy", policy.as_str()).ok())
}

/// Guess a content type from the file extension
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "txt" | "out" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
