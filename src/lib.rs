//! gocov-report - publish Go coverage profiles as browsable HTML reports
//!
//! This library implements the per-build publication workflow (stage the raw
//! coverage profile, run the external renderer, collect the rendered HTML,
//! attach a report handle to the build record) and the read side that serves
//! a published report as a static file tree.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod models;
pub mod output;
pub mod paths;
pub mod publisher;
pub mod report;
pub mod server;
