//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that workflow steps can branch on.
//! - Map `ConfigError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - An invalid capture configuration always exits with 2, never 0, so a
//!   misconfigured workflow fails loudly instead of silently skipping capture.
//! - A malformed invocation exits with 64 (`EX_USAGE`), so it never collides
//!   with the invalid-configuration code.

use build_scan_config::ConfigError;

/// Structured exit codes for build-scan-capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - decisions or configuration were printed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid configuration - the capture strategy is not recognized.
    ///
    /// Scripts should fix the workflow inputs and not retry.
    InvalidConfiguration = 2,

    /// Usage error - unknown flag, missing subcommand or unparsable argument.
    UsageError = 64,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidConfiguration { .. } => ExitCode::InvalidConfiguration,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
