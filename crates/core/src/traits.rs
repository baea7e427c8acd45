//! Collaborator traits for the provisioning engine
//!
//! These are the narrow interfaces through which the engine talks to the
//! outside world. Depending on the traits instead of concrete types keeps the
//! engine testable and lets the CLI swap in interactive or scripted
//! implementations.

use crate::Result;
use std::path::Path;

/// Interactive input source
///
/// Used once per unresolved template variable. Implementations must not echo
/// or log the entered value.
pub trait SecretPrompt {
    /// Ask the user for a secret value, using `prompt` as context
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Version-control remote lookup
///
/// Used to detect whether the user's settings checkout points at the project
/// default repository, in which case template substitution is bypassed.
pub trait RemoteLookup {
    /// Return the remote URL of the repository at `path`, or `None` if it
    /// cannot be determined
    fn retrieve_remote_url(&self, path: &Path) -> Option<String>;
}

/// Download-to-path collaborator
///
/// Retry policy, if any, belongs to the implementation; the engine performs
/// a single attempt and checks the destination afterwards.
pub trait Downloader {
    /// Download `url` to `dest`, creating parent directories as needed
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}
