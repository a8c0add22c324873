//! Resolved build scan capture configuration.
//!
//! Responsibilities:
//! - Hold the raw string value of every recognized variable after defaults.
//! - Expose read-only accessors, lenient flag parsing and lazy strategy decoding.
//!
//! Invariants:
//! - Values are never mutated after construction.
//! - Accessors return raw strings; numeric-looking fields are not parsed.
//! - Flags are `true` only for a case-insensitive `true`; anything else is `false`.

use serde::Serialize;
use std::fmt;

use crate::constants::{
    BUILD_ID_VAR, BUILD_SCAN_DATA_COPY_DIR_VAR, BUILD_SCAN_DATA_DIR_VAR, BUILD_SCAN_LINK_FILE_VAR,
    BUILD_SCAN_METADATA_FILENAME_VAR, CAPTURE_CURRENT_ENABLED_VAR, CAPTURE_LINK_ENABLED_VAR,
    CAPTURE_STRATEGY_VAR, CAPTURE_UNPUBLISHED_ENABLED_VAR, JOB_NAME_VAR, PR_NUMBER_VAR,
    RECOGNIZED_VARS, WORKFLOW_NAME_VAR,
};
use crate::loader::ConfigError;
use crate::policy::CapturePolicy;
use crate::types::CaptureStrategy;

/// Parse a boolean flag leniently.
///
/// Returns `true` for `true` in any letter case and `false` for every other input.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Immutable snapshot of the build scan capture inputs.
///
/// Built by [`ConfigurationStore`](crate::ConfigurationStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    pub(crate) workflow_name: String,
    pub(crate) job_name: String,
    pub(crate) pr_number: String,
    pub(crate) build_id: String,
    pub(crate) capture_strategy: String,
    pub(crate) capture_unpublished_enabled: String,
    pub(crate) capture_link_enabled: String,
    pub(crate) capture_current_enabled: String,
    pub(crate) build_scan_data_dir: Option<String>,
    pub(crate) build_scan_data_copy_dir: Option<String>,
    pub(crate) build_scan_link_file: Option<String>,
    pub(crate) build_scan_metadata_filename: Option<String>,
}

impl ResolvedConfiguration {
    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn pr_number(&self) -> &str {
        &self.pr_number
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    pub fn build_scan_data_dir(&self) -> Option<&str> {
        self.build_scan_data_dir.as_deref()
    }

    pub fn build_scan_data_copy_dir(&self) -> Option<&str> {
        self.build_scan_data_copy_dir.as_deref()
    }

    pub fn build_scan_link_file(&self) -> Option<&str> {
        self.build_scan_link_file.as_deref()
    }

    pub fn build_scan_metadata_filename(&self) -> Option<&str> {
        self.build_scan_metadata_filename.as_deref()
    }

    /// The capture strategy exactly as configured, before decoding.
    pub fn raw_capture_strategy(&self) -> &str {
        &self.capture_strategy
    }

    /// Decode the capture strategy.
    ///
    /// Decoding happens on every call, so an unrecognized literal only
    /// surfaces once a decision actually needs it.
    pub fn capture_strategy(&self) -> Result<CaptureStrategy, ConfigError> {
        self.capture_strategy.parse()
    }

    pub fn capture_unpublished_enabled(&self) -> bool {
        parse_flag(&self.capture_unpublished_enabled)
    }

    pub fn capture_link_enabled(&self) -> bool {
        parse_flag(&self.capture_link_enabled)
    }

    pub fn capture_current_enabled(&self) -> bool {
        parse_flag(&self.capture_current_enabled)
    }

    /// Look up the resolved value of a recognized variable by name.
    ///
    /// Returns `None` for unrecognized names and for absent path-like variables.
    pub fn get(&self, var: &str) -> Option<&str> {
        match var {
            WORKFLOW_NAME_VAR => Some(self.workflow_name.as_str()),
            JOB_NAME_VAR => Some(self.job_name.as_str()),
            PR_NUMBER_VAR => Some(self.pr_number.as_str()),
            BUILD_ID_VAR => Some(self.build_id.as_str()),
            CAPTURE_STRATEGY_VAR => Some(self.capture_strategy.as_str()),
            CAPTURE_UNPUBLISHED_ENABLED_VAR => Some(self.capture_unpublished_enabled.as_str()),
            CAPTURE_LINK_ENABLED_VAR => Some(self.capture_link_enabled.as_str()),
            CAPTURE_CURRENT_ENABLED_VAR => Some(self.capture_current_enabled.as_str()),
            BUILD_SCAN_DATA_DIR_VAR => self.build_scan_data_dir(),
            BUILD_SCAN_DATA_COPY_DIR_VAR => self.build_scan_data_copy_dir(),
            BUILD_SCAN_LINK_FILE_VAR => self.build_scan_link_file(),
            BUILD_SCAN_METADATA_FILENAME_VAR => self.build_scan_metadata_filename(),
            _ => None,
        }
    }

    /// Capture policy evaluated against this configuration.
    pub fn policy(&self) -> CapturePolicy<'_> {
        CapturePolicy::new(self)
    }
}

impl fmt::Display for ResolvedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Configuration{")?;
        for (i, var) in RECOGNIZED_VARS.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", var, self.get(var).unwrap_or("<unset>"))?;
        }
        f.write_str("}")
    }
}
