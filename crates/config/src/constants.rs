//! Environment variable names and default values for build scan capture.
//!
//! The variable names are the contract with the hosting workflow; they are
//! shared by the library, the host binary and its tests.

// =============================================================================
// Job Metadata
// =============================================================================

/// Human label of the enclosing workflow.
pub const WORKFLOW_NAME_VAR: &str = "INPUT_WORKFLOW_NAME";

/// Human label of the current job.
pub const JOB_NAME_VAR: &str = "INPUT_JOB_NAME";

/// Pull-request number, kept as a string.
pub const PR_NUMBER_VAR: &str = "PR_NUMBER";

/// Unique build identifier, kept as a string.
pub const BUILD_ID_VAR: &str = "BUILD_ID";

pub const DEFAULT_WORKFLOW_NAME: &str = "unknown workflow name";
pub const DEFAULT_JOB_NAME: &str = "unknown job name";
pub const DEFAULT_PR_NUMBER: &str = "0";
pub const DEFAULT_BUILD_ID: &str = "0";

// =============================================================================
// Capture Policy Inputs
// =============================================================================

/// One of `ALWAYS`, `ON_FAILURE`, `ON_DEMAND`.
pub const CAPTURE_STRATEGY_VAR: &str = "INPUT_BUILD_SCAN_CAPTURE_STRATEGY";

/// Gates capture of unpublished build scan data.
pub const CAPTURE_UNPUBLISHED_ENABLED_VAR: &str = "INPUT_BUILD_SCAN_CAPTURE_UNPUBLISHED_ENABLED";

/// Gates capture of the build scan link.
pub const CAPTURE_LINK_ENABLED_VAR: &str = "INPUT_BUILD_SCAN_CAPTURE_LINK_ENABLED";

/// On-demand capture request for the current run.
pub const CAPTURE_CURRENT_ENABLED_VAR: &str = "CAPTURE_BUILD_SCAN";

pub const DEFAULT_CAPTURE_STRATEGY: &str = "ALWAYS";
pub const DEFAULT_CAPTURE_UNPUBLISHED_ENABLED: &str = "true";
pub const DEFAULT_CAPTURE_LINK_ENABLED: &str = "true";
pub const DEFAULT_CAPTURE_CURRENT_ENABLED: &str = "false";

// =============================================================================
// Capture Locations (no defaults)
// =============================================================================

/// Directory where the build tool leaves build scan data.
pub const BUILD_SCAN_DATA_DIR_VAR: &str = "BUILD_SCAN_DATA_DIR";

/// Directory build scan data is copied into.
pub const BUILD_SCAN_DATA_COPY_DIR_VAR: &str = "BUILD_SCAN_DATA_COPY_DIR";

/// File the captured build scan link is written to.
pub const BUILD_SCAN_LINK_FILE_VAR: &str = "BUILD_SCAN_LINK_FILE";

/// Filename of the build scan metadata file.
pub const BUILD_SCAN_METADATA_FILENAME_VAR: &str = "BUILD_SCAN_METADATA_FILENAME";

/// Every recognized variable, in the order used for display and snapshots.
pub const RECOGNIZED_VARS: &[&str] = &[
    WORKFLOW_NAME_VAR,
    JOB_NAME_VAR,
    PR_NUMBER_VAR,
    BUILD_ID_VAR,
    CAPTURE_STRATEGY_VAR,
    CAPTURE_UNPUBLISHED_ENABLED_VAR,
    CAPTURE_LINK_ENABLED_VAR,
    CAPTURE_CURRENT_ENABLED_VAR,
    BUILD_SCAN_DATA_DIR_VAR,
    BUILD_SCAN_DATA_COPY_DIR_VAR,
    BUILD_SCAN_LINK_FILE_VAR,
    BUILD_SCAN_METADATA_FILENAME_VAR,
];
