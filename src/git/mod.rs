//! Git operations backing core library version resolution
//!
//! This module handles:
//! - Shallow branch clones of the core library repository
//! - Reading the short revision id of a checked-out tree
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (`GIT_SSH_COMMAND`, etc.)

mod auth;
mod clone;
mod error;
mod url;

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::error::{Result, source_unavailable};
use crate::resolver::SourceControl;

pub use clone::clone_branch;
pub use error::interpret_git_error;

/// Resolve the abbreviated id of the commit checked out at `repo_dir`
///
/// Same shape as `git rev-parse --short HEAD`: libgit2 picks the shortest
/// unambiguous prefix, at least `core.abbrev` characters (7 by default).
pub fn short_revision(repo_dir: &Path) -> Result<String> {
    let describe = |e: git2::Error| {
        source_unavailable(repo_dir.display().to_string(), interpret_git_error(&e))
    };

    let repo = Repository::discover(repo_dir).map_err(describe)?;
    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map_err(describe)?;
    let short = commit.as_object().short_id().map_err(describe)?;

    short
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| source_unavailable(repo_dir.display().to_string(), "revision id is not UTF-8"))
}

/// [`SourceControl`] backed by libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSourceControl;

impl SourceControl for GitSourceControl {
    fn clone_branch(&self, url: &str, branch: &str, dest: &Path, shallow: bool) -> Result<()> {
        debug!(url, branch, dest = %dest.display(), shallow, "cloning");
        clone_branch(url, branch, dest, shallow).map(drop)
    }

    fn revision(&self, repo_dir: &Path) -> Result<String> {
        short_revision(repo_dir)
    }
}
