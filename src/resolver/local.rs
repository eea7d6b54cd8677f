//! Version lookup inside a core library source tree

use std::path::Path;

use tracing::debug;

use super::SourceControl;
use crate::error::{Result, source_unavailable, version_not_found};

/// Build file holding the core library version
pub const BUILD_FILE: &str = "build.gradle";

/// Line prefix of the version assignment in [`BUILD_FILE`]
pub const VERSION_MARKER: &str = "String umcVersion = ";

/// Extract the version from build file content
///
/// The first line starting with [`VERSION_MARKER`] wins; quotes are dropped and
/// surrounding whitespace trimmed.
pub fn parse_version_marker(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(VERSION_MARKER))
        .map(|rest| rest.replace('"', "").trim().to_string())
}

/// Read `<tree>/build.gradle` and suffix its version with the tree's revision
pub fn version_from_tree(scm: &dyn SourceControl, tree: &Path) -> Result<String> {
    let build_file = tree.join(BUILD_FILE);
    let content = std::fs::read_to_string(&build_file)
        .map_err(|e| source_unavailable(build_file.display().to_string(), e.to_string()))?;

    let version = parse_version_marker(&content)
        .ok_or_else(|| version_not_found(build_file.display().to_string()))?;
    let revision = scm.revision(tree)?;

    debug!(tree = %tree.display(), %version, %revision, "read core library version");
    Ok(format!("{version}-{revision}"))
}
