//! Ephemeral directories for core library clones.
//!
//! Clone directories are never created under the current working directory, even when
//! TMPDIR is relative (TMPDIR=tmp would otherwise drop a clone into the mod project).

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, temp_dir_error};

/// Prefix for clone directories, so stray leftovers are recognizable in the temp dir.
pub const CLONE_DIR_PREFIX: &str = "umc-loader";

/// Returns an absolute directory suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a fresh clone directory. It is removed when the returned guard is dropped.
pub fn clone_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(CLONE_DIR_PREFIX)
        .tempdir_in(temp_dir_base())
        .map_err(|e| temp_dir_error(format!("failed to create clone directory: {e}")))
}

/// Remove a clone directory, reporting deletion failures instead of swallowing them.
pub fn remove_clone_dir(dir: TempDir) -> Result<()> {
    let path = dir.path().display().to_string();
    dir.close()
        .map_err(|e| temp_dir_error(format!("failed to delete {path}: {e}")))
}
