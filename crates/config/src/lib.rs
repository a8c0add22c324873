//! Build scan capture configuration and policy.
//!
//! This crate resolves the environment inputs that govern build scan capture
//! and decides, for a given build outcome, whether unpublished build scan data
//! and the build scan link should be captured.

pub mod constants;
mod loader;
mod policy;
pub mod types;

pub use loader::{ConfigError, ConfigurationStore, env_var};
pub use policy::{CaptureDecision, CapturePolicy};
pub use types::{CaptureStrategy, ResolvedConfiguration, parse_flag};
