//! Configuration types for build scan capture.
//!
//! Responsibilities:
//! - Define the capture strategy enumeration and its literal encoding.
//! - Define the immutable resolved configuration and its accessors.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader`).
//! - Capture decisions (see `policy`).

mod resolved;
mod strategy;

pub use resolved::{ResolvedConfiguration, parse_flag};
pub use strategy::CaptureStrategy;
