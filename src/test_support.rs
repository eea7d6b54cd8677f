//! Test fixtures shared by unit tests
//!
//! ```ignore
//! use crate::test_support::{commit_file, create_git_repo, create_temp_dir};
//!
//! let temp = create_temp_dir();
//! let (temp, path) = create_git_repo();
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Route `tracing` output through the test harness
///
/// `level` wins over `RUST_LOG`; without either, logging stays off.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = match level {
            Some(level) => EnvFilter::new(level.to_string()),
            None if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            None => return,
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` so temp dirs are never created under
/// the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory with a git repository initialized.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Write `name` into the work tree of `repo` and commit it on HEAD.
///
/// # Panics
///
/// Panics if any git operation fails.
pub fn commit_file(repo: &Repository, name: &str, content: &str) -> Oid {
    let workdir = repo.workdir().expect("Repository has no work tree");
    let file = workdir.join(name);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&file, content).expect("Failed to write file");

    let mut index = repo.index().expect("Failed to open index");
    index.add_path(Path::new(name)).expect("Failed to stage file");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let signature = Signature::now("Test", "test@example.com").expect("Failed to create signature");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        &format!("Add {name}"),
        &tree,
        &parents,
    )
    .expect("Failed to commit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_commit_file_chains_commits() {
        let (_temp, path) = create_git_repo();
        let repo = Repository::open(&path).unwrap();

        let first = commit_file(&repo, "build.gradle", "a");
        let second = commit_file(&repo, "nested/file.txt", "b");

        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.id(), second);
        assert_eq!(head.parent_id(0).unwrap(), first);
        assert!(path.join("nested/file.txt").exists());
    }
}
