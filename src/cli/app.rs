//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gocov_report::output::OutputMode;

use super::commands;

/// gocov-report - publish Go coverage profiles as browsable HTML reports
#[derive(Parser, Debug)]
#[command(
    name = "gocov-report",
    version,
    about = "Publish Go coverage profiles as browsable HTML reports",
    long_about = "Run as a CI build step after tests produce a coverage profile.\n\n\
                  The profile is staged into a per-build artifact directory, rendered\n\
                  to HTML with `go tool cover`, and exposed later by `serve`."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish the coverage report for one build
    Publish {
        /// Workspace root the build ran in
        #[arg(long, default_value = ".")]
        workspace: PathBuf,

        /// Builds directory holding per-build record roots
        #[arg(long)]
        builds_dir: PathBuf,

        /// Build number (names the build record root)
        #[arg(long)]
        build_number: u32,

        /// Build display name (defaults to "#<build-number>")
        #[arg(long)]
        display_name: Option<String>,

        /// Coverage profile path, relative to the workspace
        #[arg(long)]
        coverage_path: Option<String>,

        /// Configuration file (defaults to gocov-report.toml in the workspace)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail the step when the renderer exits non-zero
        #[arg(long)]
        strict_render: bool,
    },

    /// Serve published coverage reports over HTTP
    Serve {
        /// Builds directory holding per-build record roots
        #[arg(long)]
        builds_dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,

        /// Content-Security-Policy header value (overrides the default)
        #[arg(long)]
        csp: Option<String>,

        /// Disable the Content-Security-Policy header entirely
        #[arg(long, conflicts_with = "csp")]
        no_csp: bool,
    },
}

/// Parse arguments, run the selected command, and return the exit code
pub fn run() -> i32 {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    let result = match cli.command {
        Command::Publish {
            workspace,
            builds_dir,
            build_number,
            display_name,
            coverage_path,
            config,
            strict_render,
        } => commands::publish::run(&commands::publish::PublishArgs {
            workspace,
            builds_dir,
            build_number,
            display_name,
            coverage_path,
            config,
            strict_render,
            mode,
        }),
        Command::Serve { builds_dir, addr, csp, no_csp } => {
            commands::serve::run(&builds_dir, &addr, csp, no_csp)
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            1
        },
    }
}
