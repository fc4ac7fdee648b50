//! Report handle model
//!
//! The handle is what makes a published report reachable later: it names the
//! URL segment and the entry file, and it is persisted as JSON inside the
//! build record root so a separate serving process can discover it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Handle attached to a build whose coverage report was published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHandle {
    /// URL segment under which the report is served
    pub url_name: String,

    /// Default file served for an empty request path
    pub entry_file: String,

    /// Display title (the build's display name)
    pub title: String,

    /// When the handle was attached (RFC3339)
    pub attached_at: String,
}

impl ReportHandle {
    /// Create a handle with the fixed URL segment and entry file
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            url_name: paths::ARTIFACT_DIR.to_string(),
            entry_file: paths::ENTRY_FILE.to_string(),
            title: title.into(),
            attached_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Persist the handle as JSON inside the build record root
    pub fn save(&self, build_root: &Path) -> anyhow::Result<()> {
        let path = paths::handle_file(build_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the persisted handle for a build, if one exists
    pub fn load(build_root: &Path) -> anyhow::Result<Option<Self>> {
        let path = paths::handle_file(build_root);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
