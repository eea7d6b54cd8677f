//! Library declarations of a mod descriptor
//!
//! A library is something the mod ships or shades: a maven coordinate, an
//! artifact in a flat directory repository, or a jar on disk.

use crate::error::{Result, malformed_descriptor};

/// Where a library comes from
///
/// The variants are exclusive: a file library has no repository and a maven
/// library has no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// `repositoryType: "URL"`. An empty repository means the coordinate is
    /// served by a repository the build already declares.
    Maven { repository: String, artifact: String },
    /// `repositoryType: "Dir"`: artifact resolved from a local flat directory
    FlatDir { directory: String, artifact: String },
    /// `path`: a jar referenced directly by file
    File { path: String },
}

/// Package relocation applied when shading a library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

impl Relocation {
    /// Parse a `"from.package | to.package"` rule.
    ///
    /// Segments are trimmed; exactly two non-empty segments are accepted.
    pub fn parse(rule: &str) -> Result<Self> {
        let segments: Vec<&str> = rule.split('|').map(str::trim).collect();
        match segments.as_slice() {
            [from, to] if !from.is_empty() && !to.is_empty() => Ok(Self {
                from: (*from).to_string(),
                to: (*to).to_string(),
            }),
            _ => Err(malformed_descriptor(format!(
                "relocate needs two package paths separated by a '|', got '{rule}'"
            ))),
        }
    }
}

/// A library declared under `mod.libraries`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub source: LibrarySource,
    /// Gradle configuration the library is declared in (`shade`, `implementation`, ...)
    pub declaration: String,
    pub relocation: Option<Relocation>,
    /// Variant keys this library is restricted to; empty means every variant
    pub only_in: Vec<String>,
}

impl Library {
    /// Whether the library is declared for the given variant key
    pub fn applies_to(&self, variant_key: &str) -> bool {
        self.only_in.is_empty() || self.only_in.iter().any(|key| key == variant_key)
    }

}
