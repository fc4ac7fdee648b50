//! Build record model
//!
//! A build record is the standalone analogue of a CI host's run object: it
//! carries the build's identity, its on-disk root directory, its current
//! outcome, and (after publication) the attached report handle.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::ReportHandle;

/// Outcome of a build step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildOutcome {
    /// Everything worked
    #[default]
    Success,
    /// The build completed but a step degraded it (e.g. report skipped)
    Unstable,
    /// The build step failed outright
    Failure,
}

impl BuildOutcome {
    /// Ordinal used to combine outcomes; higher is worse.
    const fn severity(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Unstable => 1,
            Self::Failure => 2,
        }
    }
}

impl std::fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Unstable => write!(f, "unstable"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// One build of a job: identity, storage root, outcome, and report handle
#[derive(Debug, Clone)]
pub struct BuildRecord {
    number: u32,
    display_name: String,
    root: PathBuf,
    outcome: BuildOutcome,
    handle: Option<ReportHandle>,
}

impl BuildRecord {
    /// Create a build record with outcome `Success` and no report handle
    pub fn new(number: u32, display_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            number,
            display_name: display_name.into(),
            root: root.into(),
            outcome: BuildOutcome::Success,
            handle: None,
        }
    }

    /// Build number (unique within a job)
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Human-readable build name (e.g. "#42")
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Root directory of this build's on-disk record
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current outcome of the build
    #[must_use]
    pub const fn outcome(&self) -> BuildOutcome {
        self.outcome
    }

    /// Degrade the build outcome.
    ///
    /// An outcome can only get worse: setting `Success` on an `Unstable`
    /// build leaves it `Unstable`.
    pub fn set_outcome(&mut self, outcome: BuildOutcome) {
        if outcome.severity() > self.outcome.severity() {
            self.outcome = outcome;
        }
    }

    /// The attached report handle, if a report was published
    #[must_use]
    pub const fn handle(&self) -> Option<&ReportHandle> {
        self.handle.as_ref()
    }

    /// Attach a report handle to this build.
    ///
    /// A build has at most one handle and the handle is immutable once
    /// attached: a second attach is ignored and the original handle is
    /// returned.
    pub fn attach_handle(&mut self, handle: ReportHandle) -> &ReportHandle {
        if self.handle.is_some() {
            log::warn!("build {} already has a report handle, keeping it", self.display_name);
        }
        self.handle.get_or_insert(handle)
    }
}
