//! Provisioning context
//!
//! The context value carries the three roots every provisioning run needs.
//! It is passed explicitly into each component instead of living as ambient
//! global state.

use std::path::{Path, PathBuf};

/// Paths for a single provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    /// User configuration root (destination side)
    conf_dir: PathBuf,
    /// Checkout of the user's settings repository (source side)
    settings_dir: PathBuf,
    /// Installation root of the managed tool
    tool_root: PathBuf,
}

impl ProvisionContext {
    /// Create a context from the three roots
    #[must_use]
    pub fn new(conf_dir: PathBuf, settings_dir: PathBuf, tool_root: PathBuf) -> Self {
        Self {
            conf_dir,
            settings_dir,
            tool_root,
        }
    }

    /// User configuration root
    #[must_use]
    pub fn conf_dir(&self) -> &Path {
        &self.conf_dir
    }

    /// Settings repository checkout
    #[must_use]
    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// Directory holding configuration templates, `<settings>/templates/conf`
    #[must_use]
    pub fn templates_conf_dir(&self) -> PathBuf {
        self.settings_dir.join("templates").join("conf")
    }

    /// Installation root of the managed tool
    #[must_use]
    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_templates_conf_dir_is_under_settings() {
        let ctx = ProvisionContext::new(
            PathBuf::from("/home/me/conf"),
            PathBuf::from("/home/me/settings"),
            PathBuf::from("/opt/tools/mvn"),
        );
        assert_eq!(
            ctx.templates_conf_dir(),
            PathBuf::from("/home/me/settings/templates/conf")
        );
        assert_eq!(ctx.conf_dir(), Path::new("/home/me/conf"));
        assert_eq!(ctx.tool_root(), Path::new("/opt/tools/mvn"));
    }
}
