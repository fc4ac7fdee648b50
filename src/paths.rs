//! Centralized path definitions for gocov-report
//!
//! Single source of truth for the build-record filesystem layout. All fixed
//! names (the artifact directory, the served entry file, the persisted report
//! handle) live here.
//!
//! ## Build-record layout
//!
//! ```text
//! builds/                                  # Builds directory (one child per build)
//! ├── 1/                                   # Build record root for build #1
//! │   ├── golang-coverage-report/          # Artifact directory
//! │   │   ├── out/cover.out                # Staged coverage profile
//! │   │   └── coverage.html                # Rendered report (entry file)
//! │   └── report-handle.json               # Persisted report handle
//! └── 2/
//!     └── ...
//! ```
//!
//! The artifact directory is created at publish time, owned exclusively by
//! its build record, and deleted only by external retention policy.

use std::path::{Path, PathBuf};

/// Artifact directory name inside a build record root.
///
/// Doubles as the report's URL segment, so a report for build 7 is browsed
/// at `/7/golang-coverage-report/`.
pub const ARTIFACT_DIR: &str = "golang-coverage-report";

/// Default served file inside the artifact directory
pub const ENTRY_FILE: &str = "coverage.html";

/// Persisted report handle filename inside a build record root
pub const HANDLE_FILE: &str = "report-handle.json";

/// Project configuration filename, looked up in the workspace root
pub const CONFIG_FILE: &str = "gocov-report.toml";

/// Get the artifact directory for a build record root.
///
/// Pure function of the build record root; two calls for the same build
/// always return the same path.
#[must_use]
pub fn artifact_dir(build_root: &Path) -> PathBuf {
    build_root.join(ARTIFACT_DIR)
}

/// Get the persisted report handle path for a build record root.
#[must_use]
pub fn handle_file(build_root: &Path) -> PathBuf {
    build_root.join(HANDLE_FILE)
}

/// Get the build record root for a build number under a builds directory.
#[must_use]
pub fn build_root(builds_dir: &Path, build_number: u32) -> PathBuf {
    builds_dir.join(build_number.to_string())
}

/// Get the project configuration path for a workspace root.
#[must_use]
pub fn project_config(workspace: &Path) -> PathBuf {
    workspace.join(CONFIG_FILE)
}
