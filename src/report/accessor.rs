//! Report accessor
//!
//! Resolves request paths into the artifact directory attached to a build.
//! The contract: no path outside the artifact directory is ever served, an
//! empty request path resolves to the entry file, and directories are never
//! listed.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::paths;

/// Errors produced while resolving a request path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServeError {
    /// No file exists at the requested path (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// The request tried to escape the artifact directory (403)
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The request path could not be interpreted (400)
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ServeError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Forbidden(_) => 403,
            Self::BadRequest(_) => 400,
        }
    }
}

/// Serves the artifact directory of one build as a static file tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAccessor {
    artifact_dir: PathBuf,
    entry_file: String,
}

impl ReportAccessor {
    /// Create an accessor for a build record root
    #[must_use]
    pub fn for_build(build_root: &Path) -> Self {
        Self {
            artifact_dir: paths::artifact_dir(build_root),
            entry_file: paths::ENTRY_FILE.to_string(),
        }
    }

    /// The artifact directory this accessor serves from.
    ///
    /// Pure function of the build record root; see
    /// [`paths::artifact_dir`].
    #[must_use]
    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }

    /// Resolve a request path (already stripped of the build and report URL
    /// segments) to a file inside the artifact directory.
    ///
    /// An empty path resolves to the entry file. Absolute paths and any
    /// component other than a plain name (`..`, drive prefixes) are rejected
    /// before touching the filesystem; a resolved path that still escapes
    /// the artifact directory (e.g. through a symlink) is rejected after
    /// canonicalization.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, ServeError> {
        if request_path.starts_with('/') {
            return Err(ServeError::Forbidden(request_path.to_string()));
        }

        let trimmed = request_path.trim_end_matches('/');
        let relative = if trimmed.is_empty() { self.entry_file.as_str() } else { trimmed };

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(_) => {},
                Component::CurDir => {
                    return Err(ServeError::BadRequest(request_path.to_string()));
                },
                _ => return Err(ServeError::Forbidden(request_path.to_string())),
            }
        }

        let candidate = self.artifact_dir.join(relative);
        if !candidate.exists() {
            return Err(ServeError::NotFound(relative.to_string()));
        }
        // Directory listing is disabled
        if candidate.is_dir() {
            return Err(ServeError::NotFound(relative.to_string()));
        }

        let root = self
            .artifact_dir
            .canonicalize()
            .map_err(|_| ServeError::NotFound(relative.to_string()))?;
        let resolved = candidate
            .canonicalize()
            .map_err(|_| ServeError::NotFound(relative.to_string()))?;
        if !resolved.starts_with(&root) {
            return Err(ServeError::Forbidden(request_path.to_string()));
        }

        Ok(resolved)
    }
}
