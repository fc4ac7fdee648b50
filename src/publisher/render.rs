//! External renderer invocation
//!
//! The renderer is a single shell command (`go tool cover` by default) run
//! with the workspace as working directory and the build environment layered
//! over the inherited one. Its stdout/stderr go straight to the build log,
//! which in this standalone rendition is the step's own stdio.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::PublishConfig;
use crate::paths;

/// Expand the renderer command template for a given input path
#[must_use]
pub fn command_line(template: &str, input: &str) -> String {
    template.replace("{input}", input).replace("{output}", paths::ENTRY_FILE)
}

/// Run the renderer synchronously and return its exit status.
///
/// No timeout and no retry: the publish step blocks until the renderer
/// finishes or the host aborts the build.
pub fn run(config: &PublishConfig, workspace: &Path) -> std::io::Result<ExitStatus> {
    let cmd = command_line(&config.render_template, &config.coverage_path);
    log::info!("rendering coverage report: {} -c {cmd:?}", config.shell);

    Command::new(&config.shell)
        .arg("-c")
        .arg(&cmd)
        .current_dir(workspace)
        .envs(&config.env)
        .status()
}
