//! Core library version resolution
//!
//! This module handles:
//! - Passing pinned versions through untouched (no I/O)
//! - Deriving `"latest"` from a local checkout of the core library
//! - Deriving `"latest"` from an ephemeral shallow clone of the variant's branch
//!
//! Source control is reached through [`SourceControl`] so resolution can be
//! exercised without network or git access.

pub mod git;
pub mod local;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Endpoints;
use crate::descriptor::CoreLibraryRef;
use crate::error::{Result, missing_field};
use crate::loader::VariantKey;

pub use local::{BUILD_FILE, VERSION_MARKER, parse_version_marker};

/// Source control operations needed to resolve `"latest"`
pub trait SourceControl {
    /// Clone `branch` of `url` into the empty directory `dest`
    fn clone_branch(&self, url: &str, branch: &str, dest: &Path, shallow: bool) -> Result<()>;

    /// Abbreviated revision id of the tree checked out at `repo_dir`
    fn revision(&self, repo_dir: &Path) -> Result<String>;
}

/// Turns a [`CoreLibraryRef`] into a concrete version string
pub struct VersionResolver<'a> {
    scm: &'a dyn SourceControl,
    upstream_repository: String,
    working_dir: PathBuf,
}

impl<'a> VersionResolver<'a> {
    /// Create a resolver; relative core library paths are taken from `working_dir`
    pub fn new(scm: &'a dyn SourceControl, endpoints: &Endpoints, working_dir: &Path) -> Self {
        Self {
            scm,
            upstream_repository: endpoints.upstream_repository.clone(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Directory a local core library path refers to
    pub fn core_dir(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Resolve the core library version for `variant`
    ///
    /// Pinned versions come back unchanged. `"latest"` becomes
    /// `<build file version>-<short revision>` of the local checkout, or of a
    /// clone of the upstream branch named after the variant.
    ///
    /// # Errors
    ///
    /// `MissingField` for an empty version, `VersionNotFound` when the build
    /// file has no version marker, `SourceUnavailable` when the tree cannot be
    /// cloned or read, `TempDirError` when the clone directory cannot be
    /// created or removed.
    pub fn resolve(&self, core: &CoreLibraryRef, variant: &VariantKey) -> Result<String> {
        if core.version.trim().is_empty() {
            return Err(missing_field("umc.version"));
        }
        if !core.is_latest() {
            debug!(version = %core.version, "using pinned core library version");
            return Ok(core.version.clone());
        }

        match &core.path {
            Some(path) => local::version_from_tree(self.scm, &self.core_dir(path)),
            None => git::version_from_clone(
                self.scm,
                &self.upstream_repository,
                &variant.to_string(),
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use super::SourceControl;
    use crate::error::{Result, source_unavailable};

    /// In-memory source control that materializes a build file on clone
    pub struct FakeSourceControl {
        pub build_file: Option<String>,
        pub revision: String,
        pub fail_clone: bool,
        pub clones: RefCell<Vec<(String, String, PathBuf, bool)>>,
    }

    impl FakeSourceControl {
        pub fn with_build_file(content: &str) -> Self {
            Self {
                build_file: Some(content.to_string()),
                revision: "abcdef1".to_string(),
                fail_clone: false,
                clones: RefCell::new(Vec::new()),
            }
        }

        pub fn last_clone_dir(&self) -> Option<PathBuf> {
            self.clones.borrow().last().map(|(_, _, dest, _)| dest.clone())
        }
    }

    impl SourceControl for FakeSourceControl {
        fn clone_branch(&self, url: &str, branch: &str, dest: &Path, shallow: bool) -> Result<()> {
            self.clones
                .borrow_mut()
                .push((url.to_string(), branch.to_string(), dest.to_path_buf(), shallow));
            if self.fail_clone {
                return Err(source_unavailable(url, "Repository or branch not found"));
            }
            if let Some(content) = &self.build_file {
                std::fs::write(dest.join(super::BUILD_FILE), content)?;
            }
            Ok(())
        }

        fn revision(&self, _repo_dir: &Path) -> Result<String> {
            Ok(self.revision.clone())
        }
    }
}
