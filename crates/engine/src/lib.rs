//! Provisioning engine for toolcase
//!
//! Orchestrates the idempotent creation of a tool's configuration: the
//! security file holding the encrypted master password, the settings file
//! rendered from the user's template, and plugin artifacts. Every file
//! creation is guarded by an existence check and wrapped in a reportable
//! step; a failure on one artifact never prevents attempting the others.

pub mod download;
pub mod git;
pub mod plugin;
pub mod provision;

pub use download::HttpDownloader;
pub use git::GitRemote;
pub use plugin::{PluginDescriptor, install_plugin};
pub use provision::Provisioner;
