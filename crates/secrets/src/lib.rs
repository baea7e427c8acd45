//! Secret provisioning by delegation
//!
//! toolcase never implements encryption itself. The managed tool ships its
//! own trusted encrypt sub-commands; this crate constructs those command
//! invocations, captures their single-line result, and bootstraps the
//! master password the tool uses to protect every other stored secret.

use std::path::Path;
use thiserror::Error;

pub mod command;
pub mod master;

pub use command::CommandEncryptor;
pub use master::{generate_master_password, security_file_xml};

/// Result type for secret operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for secret provisioning
#[derive(Error, Debug)]
pub enum Error {
    /// The external encrypt command exited non-zero
    #[error("Encrypt command failed: {0}")]
    EncryptionFailed(String),

    /// The external encrypt command produced no usable output
    #[error("Encrypt command produced no output")]
    NoOutput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability interface for the managed tool's encrypt sub-commands
///
/// Implementations delegate to the wrapped tool's own trusted encryption;
/// their responsibility is correct command construction, argument escaping,
/// and reliable single-line result capture.
pub trait Encryptor {
    /// Encrypt a freshly generated master password
    fn encrypt_master_password(&self, plain: &str) -> Result<String>;

    /// Encrypt a secret value against the master password in `security_file`
    ///
    /// The plain value must never be logged or persisted.
    fn encrypt_secret(&self, plain: &str, security_file: &Path) -> Result<String>;
}
