//! Tests for output formatting

use gocov_report::models::{BuildOutcome, ReportHandle};
use gocov_report::output::{OutputMode, PublishSummary, ReportSummary};

fn success_summary() -> PublishSummary {
    PublishSummary {
        outcome: BuildOutcome::Success,
        build: "#1".to_string(),
        report: Some(ReportSummary::from(&ReportHandle::new("#1"))),
        message: None,
    }
}

#[test]
fn test_report_summary_from_handle() {
    let summary = ReportSummary::from(&ReportHandle::new("#5"));
    assert_eq!(summary.url_name, "golang-coverage-report");
    assert_eq!(summary.entry_file, "coverage.html");
}

#[test]
fn test_json_shape() {
    let value = serde_json::to_value(success_summary()).unwrap();
    assert_eq!(value["outcome"], "success");
    assert_eq!(value["build"], "#1");
    assert_eq!(value["report"]["url_name"], "golang-coverage-report");
    assert_eq!(value["report"]["entry_file"], "coverage.html");
    assert!(value["message"].is_null());
}

#[test]
fn test_unstable_json_carries_the_message() {
    let summary = PublishSummary {
        outcome: BuildOutcome::Unstable,
        build: "#2".to_string(),
        report: None,
        message: Some("could not create report directory".to_string()),
    };

    let value = serde_json::to_value(summary).unwrap();
    assert_eq!(value["outcome"], "unstable");
    assert!(value["report"].is_null());
    assert_eq!(value["message"], "could not create report directory");
}

#[test]
fn test_render_does_not_panic() {
    // Smoke test both renderers for every outcome
    for outcome in [BuildOutcome::Success, BuildOutcome::Unstable, BuildOutcome::Failure] {
        let summary = PublishSummary {
            outcome,
            build: "#3".to_string(),
            report: None,
            message: Some("detail".to_string()),
        };
        summary.render(OutputMode::Human);
        summary.render(OutputMode::Json);
    }
}
