//! Process environment access.
//!
//! Responsibilities:
//! - Read a single environment variable for the store.
//!
//! Does NOT handle:
//! - Defaults (see store.rs).
//!
//! Invariants:
//! - Values are returned verbatim: no trimming, empty strings are kept.
//! - Non-unicode values are treated as unset; the warning names the key only.

use std::env::VarError;

/// Read an environment variable, returning `None` if it is unset or not valid unicode.
pub fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "Ignoring environment variable with non-unicode value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_keeps_values_verbatim() {
        let key = "_BUILD_SCAN_TEST_VAR";

        temp_env::with_var_unset(key, || {
            assert!(env_var(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_var(key, Some(""), || {
            assert_eq!(env_var(key), Some(String::new()));
        });

        temp_env::with_var(key, Some(" padded "), || {
            assert_eq!(env_var(key), Some(" padded ".to_string()));
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_env_var_non_unicode_is_unset() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "_BUILD_SCAN_TEST_NON_UNICODE";
        temp_env::with_var(key, Some(OsStr::from_bytes(&[0x66, 0x6f, 0x80])), || {
            assert!(env_var(key).is_none());
        });
    }
}
