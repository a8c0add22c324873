//! Integration tests for the `show` command.

mod common;

use common::capture_cmd;
use predicates::prelude::*;

#[test]
fn test_show_prints_defaults() {
    capture_cmd()
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "INPUT_WORKFLOW_NAME=unknown workflow name\n",
        ))
        .stdout(predicate::str::contains("INPUT_JOB_NAME=unknown job name\n"))
        .stdout(predicate::str::contains("PR_NUMBER=0\n"))
        .stdout(predicate::str::contains("BUILD_ID=0\n"))
        .stdout(predicate::str::contains(
            "INPUT_BUILD_SCAN_CAPTURE_STRATEGY=ALWAYS\n",
        ))
        .stdout(predicate::str::contains("BUILD_SCAN_LINK_FILE=<unset>\n"));
}

#[test]
fn test_show_does_not_validate_strategy() {
    capture_cmd()
        .env("INPUT_BUILD_SCAN_CAPTURE_STRATEGY", "BOGUS")
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "INPUT_BUILD_SCAN_CAPTURE_STRATEGY=BOGUS\n",
        ));
}

#[test]
fn test_show_json() {
    let output = capture_cmd()
        .env("PR_NUMBER", "17")
        .env("BUILD_SCAN_DATA_COPY_DIR", "/tmp/copy")
        .args(["show", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pr_number"], "17");
    assert_eq!(value["build_scan_data_copy_dir"], "/tmp/copy");
    assert!(value["build_scan_data_dir"].is_null());
}
