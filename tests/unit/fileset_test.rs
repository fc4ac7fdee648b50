//! Tests for glob-based recursive copying

use std::fs;

use gocov_report::publisher::fileset;
use tempfile::TempDir;

use crate::common;

#[test]
fn test_copies_literal_path_preserving_structure() {
    let source = common::workspace(&[("out/cover.out", "mode: set\nfoo.go:1.1,2.2 1 1\n")]);
    let target = TempDir::new().unwrap();

    let copied = fileset::copy_matching(source.path(), "out/cover.out", target.path()).unwrap();

    assert_eq!(copied, 1);
    let original = fs::read(source.path().join("out/cover.out")).unwrap();
    let staged = fs::read(target.path().join("out/cover.out")).unwrap();
    assert_eq!(original, staged, "staged copy must be byte-identical");
}

#[test]
fn test_glob_collects_nested_and_root_files() {
    let source = common::workspace(&[
        ("coverage.html", "<html>root</html>"),
        ("sub/extra.html", "<html>nested</html>"),
        ("notes.txt", "not html"),
    ]);
    let target = TempDir::new().unwrap();

    let copied = fileset::copy_matching(source.path(), "**/*.html", target.path()).unwrap();

    assert_eq!(copied, 2);
    assert!(target.path().join("coverage.html").exists());
    assert!(target.path().join("sub/extra.html").exists());
    assert!(!target.path().join("notes.txt").exists());
}

#[test]
fn test_no_match_is_not_an_error() {
    let source = common::workspace(&[("notes.txt", "hi")]);
    let target = TempDir::new().unwrap();

    let copied = fileset::copy_matching(source.path(), "**/*.html", target.path()).unwrap();
    assert_eq!(copied, 0);
}

#[test]
fn test_repeated_copy_overwrites() {
    let source = common::workspace(&[("cover.out", "first")]);
    let target = TempDir::new().unwrap();

    fileset::copy_matching(source.path(), "cover.out", target.path()).unwrap();
    common::write_file(source.path(), "cover.out", "second");
    fileset::copy_matching(source.path(), "cover.out", target.path()).unwrap();

    let staged = fs::read_to_string(target.path().join("cover.out")).unwrap();
    assert_eq!(staged, "second");
}

#[test]
fn test_invalid_pattern_errors() {
    let source = common::workspace(&[]);
    let target = TempDir::new().unwrap();

    let result = fileset::copy_matching(source.path(), "a[", target.path());
    assert!(result.is_err());
}
