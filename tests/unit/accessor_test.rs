//! Tests for request-path resolution into the artifact directory

use std::fs;

use gocov_report::paths;
use gocov_report::report::{ReportAccessor, ServeError};
use tempfile::TempDir;

use crate::common;

/// Build record root with a populated artifact directory
fn published_build() -> TempDir {
    let dir = TempDir::new().unwrap();
    let artifact = paths::ARTIFACT_DIR;
    common::write_file(dir.path(), &format!("{artifact}/coverage.html"), "<html>cov</html>");
    common::write_file(dir.path(), &format!("{artifact}/out/cover.out"), "mode: set\n");
    dir
}

#[test]
fn test_empty_path_serves_the_entry_file() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    let implicit = accessor.resolve("").unwrap();
    let explicit = accessor.resolve("coverage.html").unwrap();

    assert_eq!(implicit, explicit);
    assert_eq!(fs::read_to_string(implicit).unwrap(), "<html>cov</html>");
}

#[test]
fn test_trailing_slash_is_ignored() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    assert_eq!(accessor.resolve("out/").unwrap_err(), accessor.resolve("out").unwrap_err());
    assert!(accessor.resolve("coverage.html/").is_ok());
}

#[test]
fn test_nested_file_resolves() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    let resolved = accessor.resolve("out/cover.out").unwrap();
    assert_eq!(fs::read_to_string(resolved).unwrap(), "mode: set\n");
}

#[test]
fn test_missing_file_is_not_found() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    assert!(matches!(accessor.resolve("nope.html"), Err(ServeError::NotFound(_))));
}

#[test]
fn test_directories_are_never_listed() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    assert!(matches!(accessor.resolve("out"), Err(ServeError::NotFound(_))));
}

#[test]
fn test_traversal_is_forbidden() {
    let build = published_build();
    // A secret outside the artifact directory, inside the build root
    common::write_file(build.path(), "report-handle.json", "{}");
    let accessor = ReportAccessor::for_build(build.path());

    assert!(matches!(accessor.resolve("../report-handle.json"), Err(ServeError::Forbidden(_))));
    assert!(matches!(accessor.resolve("out/../../secret"), Err(ServeError::Forbidden(_))));
    assert!(matches!(accessor.resolve("/etc/passwd"), Err(ServeError::Forbidden(_))));
}

#[test]
fn test_curdir_components_are_rejected() {
    let build = published_build();
    let accessor = ReportAccessor::for_build(build.path());

    assert!(matches!(accessor.resolve("./coverage.html"), Err(ServeError::BadRequest(_))));
}

#[test]
fn test_artifact_dir_is_deterministic() {
    let build = TempDir::new().unwrap();
    let a = ReportAccessor::for_build(build.path());
    let b = ReportAccessor::for_build(build.path());

    assert_eq!(a.artifact_dir(), b.artifact_dir());
    assert_eq!(a.artifact_dir(), paths::artifact_dir(build.path()));
}

#[test]
fn test_error_status_codes() {
    assert_eq!(ServeError::NotFound("x".to_string()).status_code(), 404);
    assert_eq!(ServeError::Forbidden("x".to_string()).status_code(), 403);
    assert_eq!(ServeError::BadRequest("x".to_string()).status_code(), 400);
}
