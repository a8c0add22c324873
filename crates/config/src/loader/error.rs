//! Error types for build scan capture configuration.
//!
//! Invariants:
//! - Every variant names the offending variable.
//! - Malformed flags and absent paths are not errors; only the capture
//!   strategy is validated, and only when a decision needs it.

use thiserror::Error;

/// Errors that can occur while evaluating capture configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({message})")]
    InvalidConfiguration {
        var: String,
        value: String,
        message: String,
    },
}
