//! Publish the coverage report for one build

use std::fs;
use std::path::PathBuf;

use gocov_report::config::PublishConfig;
use gocov_report::models::{BuildOutcome, BuildRecord};
use gocov_report::output::{OutputMode, PublishSummary, ReportSummary};
use gocov_report::publisher::{self, PublishError};
use gocov_report::paths;

/// Arguments for the publish command
#[derive(Debug)]
pub struct PublishArgs {
    /// Workspace root the build ran in
    pub workspace: PathBuf,
    /// Builds directory holding per-build record roots
    pub builds_dir: PathBuf,
    /// Build number
    pub build_number: u32,
    /// Build display name
    pub display_name: Option<String>,
    /// Coverage profile path override
    pub coverage_path: Option<String>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Fail the step when the renderer exits non-zero
    pub strict_render: bool,
    /// Output mode
    pub mode: OutputMode,
}

/// Run the publish workflow.
///
/// Exit codes: 0 on success, 2 when the build went unstable (report
/// skipped), 1 on fatal errors.
pub fn run(args: &PublishArgs) -> anyhow::Result<i32> {
    let config = load_config(args)?;
    // Configuration-time validation; publish() trusts what it is handed
    config.validate()?;

    let build_root = paths::build_root(&args.builds_dir, args.build_number);
    fs::create_dir_all(&args.builds_dir)?;

    let display_name = args
        .display_name
        .clone()
        .unwrap_or_else(|| format!("#{}", args.build_number));
    let mut record = BuildRecord::new(args.build_number, display_name, build_root);

    match publisher::publish(&mut record, &args.workspace, &config) {
        Ok(handle) => {
            let summary = PublishSummary {
                outcome: record.outcome(),
                build: record.display_name().to_string(),
                report: Some(ReportSummary::from(&handle)),
                message: None,
            };
            summary.render(args.mode);
            Ok(0)
        },
        Err(e @ PublishError::Staging { .. }) => {
            // The one locally-recovered failure: degrade instead of failing
            log::error!("could not create directory for report: {e}");
            record.set_outcome(BuildOutcome::Unstable);
            let summary = PublishSummary {
                outcome: record.outcome(),
                build: record.display_name().to_string(),
                report: None,
                message: Some(e.to_string()),
            };
            summary.render(args.mode);
            Ok(2)
        },
        Err(e @ PublishError::Render { .. }) => {
            record.set_outcome(BuildOutcome::Failure);
            let summary = PublishSummary {
                outcome: record.outcome(),
                build: record.display_name().to_string(),
                report: None,
                message: Some(e.to_string()),
            };
            summary.render(args.mode);
            Ok(1)
        },
        Err(PublishError::Fatal(e)) => Err(e),
    }
}

/// Load the effective configuration: explicit file, workspace file, or
/// defaults, with CLI flags layered on top
fn load_config(args: &PublishArgs) -> anyhow::Result<PublishConfig> {
    let mut config = if let Some(path) = &args.config {
        PublishConfig::load(path)?
    } else {
        let project = paths::project_config(&args.workspace);
        if project.exists() {
            PublishConfig::load(&project)?
        } else {
            PublishConfig::new("")
        }
    };

    if let Some(coverage_path) = &args.coverage_path {
        config.coverage_path.clone_from(coverage_path);
    }
    if args.strict_render {
        config.fail_on_render_error = true;
    }

    Ok(config)
}
