//! Shared test utilities for build-scan-capture integration tests.
//!
//! Invariants / Assumptions:
//! - Every recognized capture variable is removed so host CI settings never leak in.
//! - `RUST_LOG` is removed so stderr only carries what a test asks for.

use assert_cmd::Command;
use build_scan_config::constants::RECOGNIZED_VARS;

/// Returns a hermetic `build-scan-capture` command for integration testing.
pub fn capture_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("build-scan-capture");

    for var in RECOGNIZED_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("BUILD_SCAN_BUILD_FAILURE");
    cmd.env_remove("RUST_LOG");

    cmd
}
