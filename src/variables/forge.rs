//! Loader-specific mod dependency declarations

use crate::descriptor::Dependency;
use crate::loader::Loader;

/// Mod id the core library registers under
pub const CORE_MOD_ID: &str = "universalmodcore";

/// `required-after:<id>@<range>` entries for `mcmod.info`-era Forge, joined with `"; "`
pub fn string_dependencies(dependencies: &[Dependency]) -> String {
    dependencies
        .iter()
        .map(|dep| format!("required-after:{}@{}", dep.id, dep.versions))
        .collect::<Vec<_>>()
        .join("; ")
}

/// `mods.toml` dependency blocks, if the loader has a format for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TomlDependencies {
    Rendered(String),
    /// The loader declares dependencies elsewhere (`fabric.mod.json`, `quilt.mod.json`)
    Unsupported(Loader),
}

impl TomlDependencies {
    /// Value published in the variable table; empty when unsupported
    pub fn into_value(self) -> String {
        match self {
            TomlDependencies::Rendered(toml) => toml,
            TomlDependencies::Unsupported(_) => String::new(),
        }
    }
}

/// Render one `[[dependencies.<mod_id>]]` block per dependency
pub fn toml_dependencies(loader: Loader, mod_id: &str, dependencies: &[Dependency]) -> TomlDependencies {
    let requirement = match loader {
        Loader::Forge => "mandatory=true",
        Loader::NeoForge => "type='required'",
        Loader::Fabric | Loader::Quilt => return TomlDependencies::Unsupported(loader),
    };

    let blocks = dependencies
        .iter()
        .map(|dep| {
            format!(
                "[[dependencies.{mod_id}]]\n    \
                 modId=\"{}\"\n    \
                 {requirement}\n    \
                 versionRange=\"{}\"\n    \
                 ordering=\"BEFORE\"\n    \
                 side=\"BOTH\"\n",
                dep.id, dep.versions
            )
        })
        .collect::<Vec<_>>();

    TomlDependencies::Rendered(blocks.join("\n\n"))
}
