//! Architecture tests for the capture policy core.
//!
//! The configuration crate only reads environment variables. Capture side
//! effects belong to the host, so the library must not touch the filesystem,
//! the network, or child processes, and the policy module must not log.

use std::fs;
use std::path::{Path, PathBuf};

const FORBIDDEN_IN_LIBRARY: &[&str] = &["std::fs", "std::net", "std::process", "File::"];

const FORBIDDEN_IN_POLICY: &[&str] = &["tracing::", "println!", "eprintln!", "std::env"];

fn config_src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("config")
        .join("src")
}

/// Source with `#[cfg(test)]` modules cut off; tests may use whatever they like.
fn production_source(path: &Path) -> String {
    let content = fs::read_to_string(path).expect("Failed to read file");
    match content.find("#[cfg(test)]") {
        Some(index) => content[..index].to_string(),
        None => content,
    }
}

#[test]
fn library_performs_no_io_beyond_environment() {
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(config_src_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let source = production_source(entry.path());
        for pattern in FORBIDDEN_IN_LIBRARY {
            if source.contains(pattern) {
                violations.push(format!("{}: {}", entry.path().display(), pattern));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Capture configuration must stay IO-free:\n{}",
        violations.join("\n")
    );
}

#[test]
fn policy_module_is_pure() {
    let policy = config_src_dir().join("policy.rs");
    let source = production_source(&policy);

    for pattern in FORBIDDEN_IN_POLICY {
        assert!(
            !source.contains(pattern),
            "policy.rs must not use {}",
            pattern
        );
    }
}
