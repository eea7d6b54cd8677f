//! Branch clones of the core library repository

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use super::url::{is_local_remote, normalize_remote_url};
use crate::error::{Result, source_unavailable};

/// Clone `branch` of `url` into `target`
///
/// Authentication is delegated to git's native credential system (SSH keys,
/// credential helpers, etc.).
///
/// # Arguments
/// * `url` - The git URL to clone
/// * `branch` - Branch to check out; for the core library this is the variant key
/// * `target` - The target directory path; must be empty or absent
/// * `shallow` - Fetch only the branch tip (depth=1). Ignored for local remotes,
///   which libgit2 cannot fetch shallowly.
pub fn clone_branch(url: &str, branch: &str, target: &Path, shallow: bool) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if shallow && !is_local_remote(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.branch(branch);
    builder.fetch_options(fetch_options);

    let remote = normalize_remote_url(url);
    builder.clone(remote.as_ref(), target).map_err(|e| {
        source_unavailable(
            format!("{url} (branch {branch})"),
            interpret_git_error(&e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UmcError;
    use crate::test_support::{commit_file, create_temp_dir};

    #[test]
    fn test_clone_local_branch() {
        let upstream = create_temp_dir();
        let repo = Repository::init(upstream.path()).unwrap();
        commit_file(&repo, "build.gradle", "String umcVersion = \"1.2.0\"\n");
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch("1.20-forge", &head, false).unwrap();

        let target = create_temp_dir();
        let dest = target.path().join("clone");
        let url = format!("file://{}", upstream.path().display());
        let cloned = clone_branch(&url, "1.20-forge", &dest, true).unwrap();

        assert_eq!(cloned.head().unwrap().shorthand(), Some("1.20-forge"));
        assert!(dest.join("build.gradle").is_file());
    }

    #[test]
    fn test_clone_missing_branch_is_source_unavailable() {
        let upstream = create_temp_dir();
        let repo = Repository::init(upstream.path()).unwrap();
        commit_file(&repo, "build.gradle", "");

        let target = create_temp_dir();
        let url = format!("file://{}", upstream.path().display());
        let err = clone_branch(&url, "1.7.10-forge", &target.path().join("clone"), true)
            .map(drop)
            .unwrap_err();

        assert!(matches!(err, UmcError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("1.7.10-forge"));
    }
}
