//! Mod loader brands and the variant key built from them

use std::fmt;
use std::str::FromStr;

use crate::error::UmcError;

/// The mod loader a build targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    Forge,
    NeoForge,
    Fabric,
    Quilt,
}

impl Loader {
    pub const ALL: [Loader; 4] = [Loader::Forge, Loader::NeoForge, Loader::Fabric, Loader::Quilt];

    /// Lowercase name used in branch names, variant keys and artifact names
    pub fn as_str(self) -> &'static str {
        match self {
            Loader::Forge => "forge",
            Loader::NeoForge => "neoforge",
            Loader::Fabric => "fabric",
            Loader::Quilt => "quilt",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Loader {
    type Err = UmcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Loader::ALL
            .into_iter()
            .find(|loader| loader.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmcError::UnsupportedLoader {
                loader: s.to_string(),
            })
    }
}

/// Minecraft version plus loader, e.g. `1.12.2-forge`
///
/// This is the core library branch name, the suffix of its artifact names and
/// the key libraries restrict themselves to with `onlyIn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub minecraft: String,
    pub loader: Loader,
}

impl VariantKey {
    pub fn new(minecraft: impl Into<String>, loader: Loader) -> Self {
        Self {
            minecraft: minecraft.into(),
            loader,
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.minecraft, self.loader)
    }
}
