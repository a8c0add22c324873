//! CLI command implementations.

pub mod decide;
pub mod show;
