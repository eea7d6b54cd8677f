//! Mod descriptor model
//!
//! The descriptor is the declarative document a mod project keeps next to its
//! templates. It has three sections:
//! - `mod` - identity of the mod, its dependencies and its libraries
//! - `integration` - optional companion source tree
//! - `umc` - the core library version, pinned or `"latest"`, and an optional local checkout
//!
//! It is parsed once and never mutated afterwards.

pub mod library;
mod serialization;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, descriptor_read_failed};
use serialization::RawDescriptor;

pub use library::{Library, LibrarySource, Relocation};

/// Version sentinel meaning "resolve from the core library source tree"
pub const LATEST: &str = "latest";

/// A parsed descriptor document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub module: ModInfo,
    pub integration: Option<Integration>,
    pub core: CoreLibraryRef,
}

/// The `mod` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModInfo {
    pub package: String,
    pub class: String,
    pub name: String,
    pub id: String,
    pub version: String,
    /// Dependencies in declaration order; ids are unique because the document keys them
    pub dependencies: Vec<Dependency>,
    pub libraries: Vec<Library>,
}

/// A mod dependency with its version range expression (e.g. `[1.2,)`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub id: String,
    pub versions: String,
}

/// The `integration` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub repository: String,
    pub branch: String,
    pub path: String,
}

/// The `umc` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreLibraryRef {
    pub version: String,
    /// Local checkout of the core library; `None` means resolve remotely
    pub path: Option<PathBuf>,
}

impl CoreLibraryRef {
    /// Whether the version must be derived from the core library's source tree
    pub fn is_latest(&self) -> bool {
        self.version == LATEST
    }
}

impl ModuleDescriptor {
    /// Parse a descriptor from a generic document value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawDescriptor = serde_json::from_value(value)?;
        raw.try_into()
    }

    /// Parse a descriptor from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDescriptor = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Parse a descriptor from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Going through serde_json::Value keeps dependency order (preserve_order).
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Read a descriptor file; `.yaml`/`.yml` files are YAML, everything else JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| descriptor_read_failed(path.display().to_string(), e.to_string()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        debug!(path = %path.display(), yaml = is_yaml, "loading descriptor");
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }
}
