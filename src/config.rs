//! Build-step configuration
//!
//! The publisher trusts its caller: path rules are enforced here, at
//! configuration time, and `publish` never re-validates. Configuration comes
//! from a `gocov-report.toml` in the workspace root, with CLI flags layered
//! on top.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected before it ever reaches the publisher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The coverage path field was left empty
    #[error("please provide the coverage profile path from the test run")]
    EmptyCoveragePath,

    /// The coverage path is absolute
    #[error("the coverage path should be relative to the workspace: {0}")]
    AbsoluteCoveragePath(String),

    /// The renderer template has no input placeholder
    #[error("render template must contain an {{input}} placeholder: {0}")]
    MissingInputPlaceholder(String),
}

/// Configuration for one publish step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Coverage profile path, relative to the workspace root
    pub coverage_path: String,

    /// Shell used to run the renderer (invoked as `<shell> -c <command>`)
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Renderer command template; `{input}` is replaced with the coverage
    /// path and `{output}` with the fixed entry filename
    #[serde(default = "default_render_template")]
    pub render_template: String,

    /// Treat a non-zero renderer exit status as a publish failure.
    ///
    /// Off by default: the renderer's exit status is logged but the report
    /// handle is still attached, matching the historical behavior of the
    /// publish step this tool grew out of.
    #[serde(default)]
    pub fail_on_render_error: bool,

    /// Build environment variables added to the renderer's environment
    #[serde(default)]
    pub env: HashMap<String, String>,
}

fn default_shell() -> String {
    "/bin/bash".to_string()
}

fn default_render_template() -> String {
    "go tool cover -html={input} -o {output}".to_string()
}

impl PublishConfig {
    /// Create a config with the default renderer settings
    pub fn new(coverage_path: impl Into<String>) -> Self {
        Self {
            coverage_path: coverage_path.into(),
            shell: default_shell(),
            render_template: default_render_template(),
            fail_on_render_error: false,
            env: HashMap::new(),
        }
    }

    /// Validate the configuration.
    ///
    /// Rules: the coverage path must be non-empty and relative to the
    /// workspace, and the render template must reference its input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coverage_path.is_empty() {
            return Err(ConfigError::EmptyCoveragePath);
        }
        if self.coverage_path.starts_with('/') {
            return Err(ConfigError::AbsoluteCoveragePath(self.coverage_path.clone()));
        }
        if !self.render_template.contains("{input}") {
            return Err(ConfigError::MissingInputPlaceholder(self.render_template.clone()));
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
        Ok(config)
    }
}
