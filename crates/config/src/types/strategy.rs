//! Capture strategy enumeration.
//!
//! Invariants:
//! - The set of strategies is closed; callers match exhaustively.
//! - Literals are matched exactly (case-sensitive), as `ALWAYS`, `ON_FAILURE`, `ON_DEMAND`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::CAPTURE_STRATEGY_VAR;
use crate::loader::ConfigError;

/// Condition under which build scan artifacts are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureStrategy {
    /// Capture on every build.
    Always,
    /// Capture only when the build failed.
    OnFailure,
    /// Capture only when the current run explicitly requested it.
    OnDemand,
}

impl CaptureStrategy {
    pub const ALL: [CaptureStrategy; 3] = [Self::Always, Self::OnFailure, Self::OnDemand];

    /// The literal used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::OnFailure => "ON_FAILURE",
            Self::OnDemand => "ON_DEMAND",
        }
    }
}

impl fmt::Display for CaptureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidConfiguration {
                var: CAPTURE_STRATEGY_VAR.to_string(),
                value: s.to_string(),
                message: "must be one of ALWAYS, ON_FAILURE, ON_DEMAND".to_string(),
            })
    }
}
