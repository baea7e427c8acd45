//! Configuration for toolcase
//!
//! This crate provides tool profiles (the per-tool constants the
//! provisioning engine needs), current/legacy configuration-layout
//! resolution, and logging initialization.

pub mod layout;
pub mod logging;
pub mod profile;

use thiserror::Error;

/// Error types for configuration handling
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the profile file
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Path of the offending file
        path: String,
        /// Parser diagnostic
        message: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

pub use layout::{ConfigLayout, probe, resolve_or_create};
pub use profile::{ToolProfile, ToolProfiles};
