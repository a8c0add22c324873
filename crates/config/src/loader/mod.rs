//! Configuration loader for build scan capture inputs.
//!
//! Responsibilities:
//! - Read the recognized environment variables exactly once.
//! - Substitute documented defaults for unset variables that have one.
//! - Offer injectable lookups so callers and tests never depend on ambient state.
//!
//! Does NOT handle:
//! - Interpreting the capture strategy or flags (see `policy.rs`).
//! - Any capture side effects (copying data, writing link files).
//!
//! Invariants / Assumptions:
//! - Resolution is total: it never fails.
//! - A variable set to the empty string is present, not unset.
//! - Path-like variables without a default stay absent.

mod env;
mod error;
mod store;

pub use env::env_var;
pub use error::ConfigError;
pub use store::ConfigurationStore;
