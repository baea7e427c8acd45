//! Base error types for toolcase
//!
//! This module provides the foundation error types that all crates can use.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// User cancelled an interactive prompt
    #[error("Prompt cancelled: {0}")]
    PromptCancelled(String),

    /// Download failed
    #[error("Download failed: {0}")]
    Download(String),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
