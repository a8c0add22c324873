//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the build outcome from a flag or its environment fallback.
//!
//! Non-responsibilities:
//! - Does not read the capture configuration (see `build_scan_config`).
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "build-scan-capture")]
#[command(about = "Decide whether build scan data and links should be captured", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  build-scan-capture show\n  build-scan-capture decide --build-failure\n  INPUT_BUILD_SCAN_CAPTURE_STRATEGY=ON_FAILURE build-scan-capture -o json decide\n"
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log level used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved capture configuration
    Show,

    /// Print the capture decisions for a build outcome
    Decide {
        /// The build failed
        #[arg(long, env = "BUILD_SCAN_BUILD_FAILURE")]
        build_failure: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decide_with_global_output() {
        let cli = Cli::try_parse_from(["build-scan-capture", "decide", "--build-failure", "-o", "json"])
            .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Decide {
                build_failure: true
            }
        ));
    }

    #[test]
    fn test_output_defaults_to_text() {
        let cli = Cli::try_parse_from(["build-scan-capture", "show"]).unwrap();

        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.log_level, "warn");
    }
}
