//! Data models for gocov-report
//!
//! Core abstractions:
//! - `BuildRecord`: one build's identity, root directory, outcome, and report
//! - `BuildOutcome`: pass/unstable/fail state of a build step
//! - `ReportHandle`: the record attached to a build enabling report access

pub mod build;
pub mod handle;

pub use build::{BuildOutcome, BuildRecord};
pub use handle::ReportHandle;
