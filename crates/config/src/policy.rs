//! Capture policy evaluation.
//!
//! Responsibilities:
//! - Decide whether unpublished build scan data should be captured.
//! - Decide whether the build scan link should be captured.
//!
//! Does NOT handle:
//! - Performing the capture (copying data, writing the link file).
//! - Logging; decisions are pure functions of the configuration and the build outcome.
//!
//! Invariants:
//! - A disabled per-artifact flag yields `false` without decoding the strategy.
//! - `ON_DEMAND` ignores the build outcome; `ON_FAILURE` ignores the current-run flag.
//! - An unrecognized strategy is returned as `ConfigError::InvalidConfiguration`.

use serde::Serialize;

use crate::loader::ConfigError;
use crate::types::{CaptureStrategy, ResolvedConfiguration};

/// Capture decisions for a single build outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptureDecision {
    /// Capture unpublished build scan data.
    pub unpublished: bool,
    /// Capture the build scan link.
    pub link: bool,
}

impl CaptureDecision {
    /// Whether anything needs to be captured.
    pub fn any(&self) -> bool {
        self.unpublished || self.link
    }
}

/// Capture policy bound to a resolved configuration.
#[derive(Debug, Clone, Copy)]
pub struct CapturePolicy<'a> {
    config: &'a ResolvedConfiguration,
}

impl<'a> CapturePolicy<'a> {
    pub fn new(config: &'a ResolvedConfiguration) -> Self {
        Self { config }
    }

    pub fn should_capture_unpublished(&self, is_build_failure: bool) -> Result<bool, ConfigError> {
        if !self.config.capture_unpublished_enabled() {
            return Ok(false);
        }
        self.is_capture_required(is_build_failure)
    }

    pub fn should_capture_link(&self, is_build_failure: bool) -> Result<bool, ConfigError> {
        if !self.config.capture_link_enabled() {
            return Ok(false);
        }
        self.is_capture_required(is_build_failure)
    }

    /// Whether the strategy calls for a capture, ignoring the per-artifact flags.
    pub fn is_capture_required(&self, is_build_failure: bool) -> Result<bool, ConfigError> {
        let required = match self.config.capture_strategy()? {
            CaptureStrategy::Always => true,
            CaptureStrategy::OnFailure => is_build_failure,
            CaptureStrategy::OnDemand => self.config.capture_current_enabled(),
        };
        Ok(required)
    }

    /// Evaluate both decisions at once.
    pub fn decide(&self, is_build_failure: bool) -> Result<CaptureDecision, ConfigError> {
        Ok(CaptureDecision {
            unpublished: self.should_capture_unpublished(is_build_failure)?,
            link: self.should_capture_link(is_build_failure)?,
        })
    }
}
