//! gocov-report - publish Go coverage profiles as browsable HTML reports
//!
//! The `publish` subcommand is meant to run as a CI build step after the
//! tests produce a coverage profile; the `serve` subcommand exposes the
//! published reports over HTTP.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the gocov-report CLI
fn main() {
    std::process::exit(cli::run());
}
