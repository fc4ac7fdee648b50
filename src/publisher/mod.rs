//! Report publication workflow
//!
//! Converts the raw coverage profile produced during a build into a browsable
//! HTML report inside the build's artifact directory:
//!
//! 1. ensure the artifact directory exists
//! 2. stage the coverage profile out of the workspace
//! 3. run the external renderer
//! 4. collect the rendered HTML out of the workspace
//! 5. attach and persist a report handle on the build record
//!
//! Only step 1 has a classified, locally-recoverable failure (`Staging`);
//! every other I/O failure is fatal and aborts the step.

use std::fs;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

use crate::config::PublishConfig;
use crate::models::{BuildRecord, ReportHandle};
use crate::paths;

pub mod fileset;
pub mod render;

/// Glob used to collect rendered output from the workspace.
///
/// Deliberately broad: if the renderer produces several HTML files, all of
/// them end up in the artifact directory.
pub const RENDERED_REPORT_GLOB: &str = "**/*.html";

/// Failure modes of the publish workflow
#[derive(Debug, Error)]
pub enum PublishError {
    /// The artifact directory could not be created.
    ///
    /// The one recoverable failure: the caller marks the build unstable and
    /// skips the report instead of failing the build.
    #[error("could not create report directory {path}: {source}")]
    Staging {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited with a non-zero status (strict mode only)
    #[error("coverage renderer exited with {status}")]
    Render {
        /// Exit status reported by the shell
        status: ExitStatus,
    },

    /// Any other I/O failure; fatal, fails the build step
    #[error(transparent)]
    Fatal(#[from] anyhow::Error),
}

/// Publish the build's coverage report.
///
/// Expects an already-validated configuration (see
/// [`PublishConfig::validate`](crate::config::PublishConfig::validate)); the
/// coverage path in particular is trusted to be relative and non-empty.
///
/// On success the returned handle has also been attached to `record` and
/// persisted under the build record root. On a [`PublishError::Staging`]
/// failure nothing has been copied and no handle exists; the caller decides
/// the build outcome.
pub fn publish(
    record: &mut BuildRecord,
    workspace: &Path,
    config: &PublishConfig,
) -> Result<ReportHandle, PublishError> {
    // Step 1: ensure the artifact directory
    let target = paths::artifact_dir(record.root());
    if !target.exists() {
        fs::create_dir_all(&target).map_err(|source| PublishError::Staging {
            path: target.display().to_string(),
            source,
        })?;
    }

    // Step 2: stage the coverage profile, preserving relative structure
    let staged = fileset::copy_matching(workspace, &config.coverage_path, &target)?;
    log::info!("staged {staged} coverage file(s) matching {:?}", config.coverage_path);

    // Step 3: render; stdout/stderr stream to the build log while we wait
    let status = render::run(config, workspace)
        .map_err(|e| anyhow::anyhow!("failed to launch coverage renderer: {e}"))?;
    if !status.success() {
        if config.fail_on_render_error {
            return Err(PublishError::Render { status });
        }
        log::warn!("coverage renderer exited with {status}, publishing anyway");
    }

    // Step 4: collect everything the renderer produced
    let collected = fileset::copy_matching(workspace, RENDERED_REPORT_GLOB, &target)?;
    log::info!("collected {collected} rendered file(s) matching {RENDERED_REPORT_GLOB:?}");

    // Step 5: attach the handle and persist it for the serving side
    let title = record.display_name().to_string();
    let handle = record.attach_handle(ReportHandle::new(title)).clone();
    handle.save(record.root())?;

    Ok(handle)
}
