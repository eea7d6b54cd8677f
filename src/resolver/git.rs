//! Version lookup through an ephemeral clone of the core library

use tracing::info;

use super::SourceControl;
use super::local::version_from_tree;
use crate::error::Result;
use crate::temp;

/// Shallow-clone `branch` of `url` into a temp directory and read its version
///
/// The clone directory is removed on every exit path: explicitly on success so
/// deletion failures are reported, by drop on failure.
pub fn version_from_clone(scm: &dyn SourceControl, url: &str, branch: &str) -> Result<String> {
    let dir = temp::clone_dir()?;
    info!(url, branch, "cloning core library to resolve latest version");

    scm.clone_branch(url, branch, dir.path(), true)?;
    let version = version_from_tree(scm, dir.path())?;

    temp::remove_clone_dir(dir)?;
    info!(%version, "resolved latest core library version");
    Ok(version)
}
