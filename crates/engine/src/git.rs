//! Git remote lookup via git2
//!
//! Used to decide whether the user's settings checkout is the project
//! default repository. Any failure (not a repository, no origin remote)
//! resolves to `None`; the caller warns and proceeds as not-default.

use std::path::Path;
use toolcase_core::RemoteLookup;
use tracing::debug;

/// Remote lookup backed by git2 (libgit2)
pub struct GitRemote;

impl RemoteLookup for GitRemote {
    fn retrieve_remote_url(&self, path: &Path) -> Option<String> {
        let repo = git2::Repository::discover(path).ok()?;
        let remote = repo.find_remote("origin").ok()?;
        let url = remote.url().map(ToString::to_string);
        debug!("Resolved origin remote of {} as {url:?}", path.display());
        url
    }
}
