//! build-scan-capture - decide whether build scan artifacts should be captured.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve the capture configuration from the environment exactly once.
//! - Print the configuration or the capture decisions and exit with a structured code.
//!
//! Does NOT handle:
//! - Performing the capture (copying data, writing link files, uploading).
//!
//! Invariants:
//! - Logs go to stderr; stdout only carries command output.
//! - `RUST_LOG` takes precedence over `--log-level`.
//! - Usage errors exit with 64, never 2, which is reserved for invalid configuration.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use build_scan_config::ConfigurationStore;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::UsageError.as_i32());
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ConfigurationStore::resolve();
    tracing::debug!(%config, "Loaded build scan capture configuration");

    let exit_code = match run_command(cli, &config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
