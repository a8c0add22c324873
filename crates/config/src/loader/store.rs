//! Configuration store: one-time resolution of the capture inputs.
//!
//! Responsibilities:
//! - Resolve every recognized variable from a lookup function.
//! - Apply the documented defaults and leave path-like variables absent.
//!
//! Does NOT handle:
//! - Validation of the capture strategy (deferred to evaluation time).

use std::collections::HashMap;

use super::env::env_var;
use crate::constants::{
    BUILD_ID_VAR, BUILD_SCAN_DATA_COPY_DIR_VAR, BUILD_SCAN_DATA_DIR_VAR, BUILD_SCAN_LINK_FILE_VAR,
    BUILD_SCAN_METADATA_FILENAME_VAR, CAPTURE_CURRENT_ENABLED_VAR, CAPTURE_LINK_ENABLED_VAR,
    CAPTURE_STRATEGY_VAR, CAPTURE_UNPUBLISHED_ENABLED_VAR, DEFAULT_BUILD_ID,
    DEFAULT_CAPTURE_CURRENT_ENABLED, DEFAULT_CAPTURE_LINK_ENABLED, DEFAULT_CAPTURE_STRATEGY,
    DEFAULT_CAPTURE_UNPUBLISHED_ENABLED, DEFAULT_JOB_NAME, DEFAULT_PR_NUMBER,
    DEFAULT_WORKFLOW_NAME, JOB_NAME_VAR, PR_NUMBER_VAR, RECOGNIZED_VARS, WORKFLOW_NAME_VAR,
};
use crate::types::ResolvedConfiguration;

/// Entry point for resolving build scan capture configuration.
///
/// The store itself holds nothing; each constructor returns an immutable
/// [`ResolvedConfiguration`] that callers pass to whoever needs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationStore;

impl ConfigurationStore {
    /// Resolve the configuration from the current process environment.
    pub fn resolve() -> ResolvedConfiguration {
        Self::from_lookup(env_var)
    }

    /// Resolve the configuration from an arbitrary lookup function.
    ///
    /// The lookup is called once per recognized variable.
    pub fn from_lookup<F>(lookup: F) -> ResolvedConfiguration
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaulted = Vec::new();
        let mut or_default = |key: &'static str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                defaulted.push(key);
                default.to_string()
            })
        };

        let workflow_name = or_default(WORKFLOW_NAME_VAR, DEFAULT_WORKFLOW_NAME);
        let job_name = or_default(JOB_NAME_VAR, DEFAULT_JOB_NAME);
        let pr_number = or_default(PR_NUMBER_VAR, DEFAULT_PR_NUMBER);
        let build_id = or_default(BUILD_ID_VAR, DEFAULT_BUILD_ID);
        let capture_strategy = or_default(CAPTURE_STRATEGY_VAR, DEFAULT_CAPTURE_STRATEGY);
        let capture_unpublished_enabled = or_default(
            CAPTURE_UNPUBLISHED_ENABLED_VAR,
            DEFAULT_CAPTURE_UNPUBLISHED_ENABLED,
        );
        let capture_link_enabled =
            or_default(CAPTURE_LINK_ENABLED_VAR, DEFAULT_CAPTURE_LINK_ENABLED);
        let capture_current_enabled =
            or_default(CAPTURE_CURRENT_ENABLED_VAR, DEFAULT_CAPTURE_CURRENT_ENABLED);

        let config = ResolvedConfiguration {
            workflow_name,
            job_name,
            pr_number,
            build_id,
            capture_strategy,
            capture_unpublished_enabled,
            capture_link_enabled,
            capture_current_enabled,
            build_scan_data_dir: lookup(BUILD_SCAN_DATA_DIR_VAR),
            build_scan_data_copy_dir: lookup(BUILD_SCAN_DATA_COPY_DIR_VAR),
            build_scan_link_file: lookup(BUILD_SCAN_LINK_FILE_VAR),
            build_scan_metadata_filename: lookup(BUILD_SCAN_METADATA_FILENAME_VAR),
        };

        tracing::debug!(
            resolved = RECOGNIZED_VARS.len(),
            defaulted = ?defaulted,
            "Resolved build scan capture configuration"
        );

        config
    }

    /// Resolve the configuration from explicit key/value pairs.
    ///
    /// Keys that are not recognized are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> ResolvedConfiguration
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }
}
