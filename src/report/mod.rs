//! Read side of a published report
//!
//! HTTP-agnostic: the accessor turns request paths into files inside a
//! build's artifact directory; the `server` module adapts it to an actual
//! HTTP framework.

pub mod accessor;

pub use accessor::{ReportAccessor, ServeError};
