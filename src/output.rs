//! Output formatting for human and JSON modes
//!
//! Structured summaries for the CLI that render either as colored
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::{BuildOutcome, ReportHandle};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a publish step
#[derive(Debug, Serialize)]
pub struct PublishSummary {
    /// Final outcome of the build step
    pub outcome: BuildOutcome,
    /// Build display name
    pub build: String,
    /// Attached report, if publication succeeded
    pub report: Option<ReportSummary>,
    /// Failure explanation when no report was attached
    pub message: Option<String>,
}

/// The published report, as visible to a later UI request
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    /// URL segment the report is served under
    pub url_name: String,
    /// Default file served for the report root
    pub entry_file: String,
}

impl From<&ReportHandle> for ReportSummary {
    fn from(handle: &ReportHandle) -> Self {
        Self {
            url_name: handle.url_name.clone(),
            entry_file: handle.entry_file.clone(),
        }
    }
}

impl PublishSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match self.outcome {
            BuildOutcome::Success => {
                println!("{} coverage report for build {}", "Published".green().bold(), self.build);
                if let Some(report) = &self.report {
                    println!("  {}/{}", report.url_name, report.entry_file);
                }
            },
            BuildOutcome::Unstable => {
                println!("{} build {}: report skipped", "UNSTABLE".yellow().bold(), self.build);
                if let Some(message) = &self.message {
                    println!("  {message}");
                }
            },
            BuildOutcome::Failure => {
                println!("{} build {}", "FAILED".red().bold(), self.build);
                if let Some(message) = &self.message {
                    println!("  {message}");
                }
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
