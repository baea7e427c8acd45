//! CLI command implementations

pub mod plugin;
pub mod provision;
