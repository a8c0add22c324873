//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration resolution (done once in `main()`).

use anyhow::Result;
use build_scan_config::ResolvedConfiguration;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, config: &ResolvedConfiguration) -> Result<()> {
    match cli.command {
        Commands::Show => commands::show::run(config, cli.output),
        Commands::Decide { build_failure } => {
            commands::decide::run(config, build_failure, cli.output)
        }
    }
}
