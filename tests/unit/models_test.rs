//! Tests for build record and report handle models

use gocov_report::models::{BuildOutcome, BuildRecord, ReportHandle};
use gocov_report::paths;
use tempfile::TempDir;

#[test]
fn test_new_record_is_successful_with_no_handle() {
    let record = BuildRecord::new(1, "#1", "builds/1");
    assert_eq!(record.outcome(), BuildOutcome::Success);
    assert!(record.handle().is_none());
    assert_eq!(record.number(), 1);
    assert_eq!(record.display_name(), "#1");
}

#[test]
fn test_outcome_only_degrades() {
    let mut record = BuildRecord::new(1, "#1", "builds/1");

    record.set_outcome(BuildOutcome::Unstable);
    assert_eq!(record.outcome(), BuildOutcome::Unstable);

    // Cannot improve back to success
    record.set_outcome(BuildOutcome::Success);
    assert_eq!(record.outcome(), BuildOutcome::Unstable);

    record.set_outcome(BuildOutcome::Failure);
    assert_eq!(record.outcome(), BuildOutcome::Failure);

    record.set_outcome(BuildOutcome::Unstable);
    assert_eq!(record.outcome(), BuildOutcome::Failure);
}

#[test]
fn test_outcome_display() {
    assert_eq!(BuildOutcome::Success.to_string(), "success");
    assert_eq!(BuildOutcome::Unstable.to_string(), "unstable");
    assert_eq!(BuildOutcome::Failure.to_string(), "failure");
}

#[test]
fn test_at_most_one_handle() {
    let mut record = BuildRecord::new(3, "#3", "builds/3");

    let first = record.attach_handle(ReportHandle::new("#3")).clone();
    let second = record.attach_handle(ReportHandle::new("something else")).clone();

    // The second attach is a no-op; the original handle survives untouched
    assert_eq!(first, second);
    assert_eq!(record.handle().unwrap().title, "#3");
}

#[test]
fn test_handle_has_fixed_slug_and_entry_file() {
    let handle = ReportHandle::new("#9");
    assert_eq!(handle.url_name, "golang-coverage-report");
    assert_eq!(handle.entry_file, "coverage.html");
    assert_eq!(handle.title, "#9");
    assert!(!handle.attached_at.is_empty());
}

#[test]
fn test_handle_save_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let handle = ReportHandle::new("#12");

    handle.save(dir.path()).unwrap();
    assert!(paths::handle_file(dir.path()).exists());

    let loaded = ReportHandle::load(dir.path()).unwrap().unwrap();
    assert_eq!(loaded, handle);
}

#[test]
fn test_handle_load_missing_is_none() {
    let dir = TempDir::new().unwrap();
    assert!(ReportHandle::load(dir.path()).unwrap().is_none());
}
