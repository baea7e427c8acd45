//! Configuration layout resolution
//!
//! A tool's configuration folder may exist in the current layout or in a
//! deprecated legacy layout. Resolution is a priority-ordered probe: current
//! first, then legacy. When neither exists the destination resolver creates
//! the caller's preferred layout, so a user who historically used the legacy
//! layout keeps it instead of being silently migrated.

use crate::Result;
use crate::profile::ToolProfile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which configuration directory layout is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigLayout {
    /// Preferred layout, e.g. `conf/mvn`
    #[default]
    Current,
    /// Deprecated layout retained for backward compatibility, e.g. `conf/.m2`
    Legacy,
}

impl ConfigLayout {
    /// Folder name for this layout according to `profile`
    #[must_use]
    pub fn folder_name(self, profile: &ToolProfile) -> &str {
        match self {
            ConfigLayout::Current => &profile.config_folder,
            ConfigLayout::Legacy => &profile.legacy_folder,
        }
    }
}

/// Probe order: current beats legacy. Listed once so adding a layout means
/// extending this slice, not nesting another conditional.
const PROBE_ORDER: [ConfigLayout; 2] = [ConfigLayout::Current, ConfigLayout::Legacy];

/// Find the existing configuration folder under `base`, if any
///
/// Never creates directories. Returns the first layout in precedence order
/// whose folder exists as a directory. Callers doing template lookup treat
/// `None` as "no template available" and skip provisioning with a warning.
#[must_use]
pub fn probe(base: &Path, profile: &ToolProfile) -> Option<(PathBuf, ConfigLayout)> {
    for layout in PROBE_ORDER {
        let candidate = base.join(layout.folder_name(profile));
        if candidate.is_dir() {
            debug!("Resolved {:?} config folder at {}", layout, candidate.display());
            return Some((candidate, layout));
        }
    }
    None
}

/// Resolve the configuration folder under `base`, creating it if missing
///
/// Existing folders win in precedence order. When neither layout exists the
/// folder for `preferred` is created, mirroring the layout of the template
/// source (legacy in, legacy out).
pub fn resolve_or_create(
    base: &Path,
    profile: &ToolProfile,
    preferred: ConfigLayout,
) -> Result<PathBuf> {
    if let Some((existing, _)) = probe(base, profile) {
        return Ok(existing);
    }
    let created = base.join(preferred.folder_name(profile));
    fs::create_dir_all(&created)?;
    debug!("Created {:?} config folder at {}", preferred, created.display());
    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn profile() -> ToolProfile {
        ToolProfile::default()
    }

    #[test]
    fn test_probe_prefers_current() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("mvn")).unwrap();
        fs::create_dir(dir.path().join(".m2")).unwrap();

        let (path, layout) = probe(dir.path(), &profile()).unwrap();
        assert_eq!(layout, ConfigLayout::Current);
        assert_eq!(path, dir.path().join("mvn"));
    }

    #[test]
    fn test_probe_falls_back_to_legacy() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".m2")).unwrap();

        let (path, layout) = probe(dir.path(), &profile()).unwrap();
        assert_eq!(layout, ConfigLayout::Legacy);
        assert_eq!(path, dir.path().join(".m2"));
    }

    #[test]
    fn test_probe_none_when_neither_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(probe(dir.path(), &profile()).is_none());
    }

    #[test]
    fn test_probe_ignores_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mvn"), "not a directory").unwrap();
        fs::create_dir(dir.path().join(".m2")).unwrap();

        let (_, layout) = probe(dir.path(), &profile()).unwrap();
        assert_eq!(layout, ConfigLayout::Legacy);
    }

    #[test]
    fn test_resolve_returns_existing_current() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("mvn")).unwrap();

        let path = resolve_or_create(dir.path(), &profile(), ConfigLayout::Legacy).unwrap();
        // Existing folder wins even when the caller prefers legacy
        assert_eq!(path, dir.path().join("mvn"));
    }

    #[test]
    fn test_resolve_creates_preferred_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_or_create(dir.path(), &profile(), ConfigLayout::Current).unwrap();
        assert_eq!(path, dir.path().join("mvn"));
        assert!(path.is_dir());
    }

    #[test]
    fn test_resolve_creates_preferred_legacy() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_or_create(dir.path(), &profile(), ConfigLayout::Legacy).unwrap();
        assert_eq!(path, dir.path().join(".m2"));
        assert!(path.is_dir());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = resolve_or_create(dir.path(), &profile(), ConfigLayout::Current).unwrap();
        let second = resolve_or_create(dir.path(), &profile(), ConfigLayout::Current).unwrap();
        assert_eq!(first, second);
    }
}
