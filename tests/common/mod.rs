//! Common test utilities for umc-template integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// Descriptor `mod` section shared by most tests
#[allow(dead_code)]
pub const MOD_SECTION: &str = r#""mod": {
    "pkg": "com.x", "cls": "Mod", "name": "X", "id": "x", "version": "1.0",
    "dependencies": {}
}"#;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `umc.json` with the shared mod section and the given `umc` section
    pub fn write_descriptor(&self, umc: &str) -> PathBuf {
        self.write_file("umc.json", &format!("{{ {MOD_SECTION}, \"umc\": {umc} }}"));
        self.path.join("umc.json")
    }

    /// Fake local core library build output for `variant` at `version`
    pub fn create_core_jar(&self, checkout: &str, variant: &str, version: &str) -> PathBuf {
        let jar = format!("{checkout}/build/libs/UniversalModCore-{variant}-{version}.jar");
        self.write_file(&jar, "PK\u{3}\u{4}core");
        self.path.join(jar)
    }

    /// The binary under test, running inside this workspace
    pub fn umc_cmd(&self) -> Command {
        let mut cmd = umc_cmd();
        cmd.current_dir(&self.path)
            .env_remove("RUST_LOG")
            .env_remove("UMC_WORKSPACE")
            .env_remove("UMC_UPSTREAM_REPOSITORY")
            .env_remove("UMC_MAVEN_URL");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn umc_cmd() -> Command {
    Command::cargo_bin("umc-template").expect("Failed to find umc-template binary")
}

/// A local stand-in for the upstream core library repository
#[allow(dead_code)]
pub struct Upstream {
    pub temp: TempDir,
    pub url: String,
    /// Full id of the commit on the variant branch
    pub commit: String,
}

/// Create a repository whose `branch` holds a build file declaring `version`
#[allow(dead_code)]
pub fn create_upstream(branch: &str, version: &str) -> Upstream {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let repo = Repository::init(temp.path()).expect("Failed to init git repository");

    std::fs::write(
        temp.path().join("build.gradle"),
        format!("apply plugin: 'java'\nString umcVersion = \"{version}\"\n"),
    )
    .expect("Failed to write build.gradle");

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_path(Path::new("build.gradle"))
        .expect("Failed to stage build.gradle");
    index.write().expect("Failed to write index");
    let tree = repo
        .find_tree(index.write_tree().expect("Failed to write tree"))
        .expect("Failed to find tree");
    let signature = Signature::now("Test", "test@example.com").expect("Failed to create signature");
    let oid = repo
        .commit(Some("HEAD"), &signature, &signature, "Initial", &tree, &[])
        .expect("Failed to commit");

    let commit = repo.find_commit(oid).expect("Failed to find commit");
    repo.branch(branch, &commit, false)
        .expect("Failed to create branch");

    Upstream {
        url: format!("file://{}", temp.path().display()),
        commit: oid.to_string(),
        temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_create_upstream_branch() {
        let upstream = create_upstream("1.12.2-forge", "1.2.0");
        let repo = Repository::open(upstream.temp.path()).unwrap();
        assert!(repo.find_branch("1.12.2-forge", git2::BranchType::Local).is_ok());
    }
}
