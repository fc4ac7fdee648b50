//! Serve published coverage reports over HTTP

use std::path::Path;

use gocov_report::server::{self, ServerConfig};

/// Run the blocking report server
pub fn run(
    builds_dir: &Path,
    addr: &str,
    csp: Option<String>,
    no_csp: bool,
) -> anyhow::Result<i32> {
    anyhow::ensure!(builds_dir.is_dir(), "builds directory not found: {}", builds_dir.display());

    let mut config = ServerConfig::new(addr, builds_dir);
    if no_csp {
        config.content_security_policy = None;
    } else if let Some(policy) = csp {
        config.content_security_policy = Some(policy);
    }

    server::tiny_http::serve(&config)?;
    Ok(0)
}
