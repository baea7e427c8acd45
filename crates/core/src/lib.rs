//! Core types and utilities for toolcase
//!
//! This is the foundation crate that all other toolcase crates depend on.
//! It provides:
//! - Base error types
//! - Provisioning step reporting
//! - The provisioning context value
//! - Collaborator traits (SecretPrompt, RemoteLookup, Downloader)
//!
//! This crate has no dependencies on other toolcase crates.

pub mod context;
pub mod error;
pub mod step;
pub mod traits;

pub use context::ProvisionContext;
pub use error::{Error, Result};
pub use step::{Outcome, ProvisionReport, Step};
pub use traits::{Downloader, RemoteLookup, SecretPrompt};
