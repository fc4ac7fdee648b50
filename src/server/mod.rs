//! HTTP serving of published reports
//!
//! This module provides the adapter between an HTTP framework and the
//! HTTP-agnostic report accessor, plus the server configuration.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight blocking HTTP server

use std::path::{Path, PathBuf};

use crate::report::{ReportAccessor, ServeError};
use crate::{models::ReportHandle, paths};

pub mod tiny_http;

/// Default Content-Security-Policy applied to served report files
pub const DEFAULT_CSP: &str =
    "sandbox; default-src 'none'; img-src 'self'; style-src 'self';";

/// Configuration for the report server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. `127.0.0.1:8080`
    pub addr: String,

    /// Builds directory: one build record root per child directory
    pub builds_dir: PathBuf,

    /// Content-Security-Policy header applied to every response.
    ///
    /// Explicit, per-server configuration; `None` disables the header
    /// for reports whose HTML needs inline scripts.
    pub content_security_policy: Option<String>,
}

impl ServerConfig {
    /// Create a config with the default restrictive security policy
    pub fn new(addr: impl Into<String>, builds_dir: impl Into<PathBuf>) -> Self {
        Self {
            addr: addr.into(),
            builds_dir: builds_dir.into(),
            content_security_policy: Some(DEFAULT_CSP.to_string()),
        }
    }
}

/// Resolve a request URL of the form `/<build>/<url-segment>[/<path>]` to a
/// file inside that build's artifact directory.
///
/// HTTP-agnostic routing core used by the framework adapters.
pub fn resolve_request(builds_dir: &Path, url: &str) -> Result<PathBuf, ServeError> {
    // Query strings are irrelevant to static files
    let path = url.split('?').next().unwrap_or(url);
    let mut segments = path.trim_start_matches('/').splitn(3, '/');

    let build = segments.next().filter(|s| !s.is_empty());
    let Some(build) = build else {
        return Err(ServeError::BadRequest(url.to_string()));
    };
    // Build record roots are numbered directories; anything else is not a build
    let number: u32 = build
        .parse()
        .map_err(|_| ServeError::NotFound(build.to_string()))?;

    let Some(segment) = segments.next() else {
        return Err(ServeError::NotFound(path.to_string()));
    };
    if segment != paths::ARTIFACT_DIR {
        return Err(ServeError::NotFound(segment.to_string()));
    }

    let build_root = paths::build_root(builds_dir, number);
    if !build_root.is_dir() {
        return Err(ServeError::NotFound(build.to_string()));
    }
    // Only builds that actually published a report are served
    let handle = ReportHandle::load(&build_root)
        .map_err(|e| ServeError::BadRequest(e.to_string()))?
        .ok_or_else(|| ServeError::NotFound(format!("no report for build {build}")))?;
    log::debug!("serving report {:?} for build {build}", handle.title);

    ReportAccessor::for_build(&build_root).resolve(segments.next().unwrap_or(""))
}
