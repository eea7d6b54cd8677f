//! umc-template - build descriptor resolution for UniversalModCore mods
//!
//! A mod built on UniversalModCore keeps one descriptor next to a set of
//! templates (`build.gradle`, `mods.toml`, source stubs). For each target
//! Minecraft version and loader this crate resolves the descriptor into a table
//! of build variables and substitutes them into the templates.
//!
//! # Pipeline
//!
//! 1. [`descriptor`] - parse the descriptor document (JSON or YAML)
//! 2. [`resolver`] - pin the core library version, resolving `"latest"` from a
//!    local checkout or an ephemeral clone of the variant's branch
//! 3. [`artifact`] - locate the core library jar, locally or on the maven host
//! 4. [`variables`] - build the variable table
//! 5. [`template`] - substitute the table into template text or file trees
//!
//! [`Resolution`] runs steps 2 to 4 in one call.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use umc_template::{
//!     ArtifactLocator, Endpoints, GitSourceControl, Loader, ModuleDescriptor, Resolution,
//!     VariableDialect, VariantKey, VersionResolver, template,
//! };
//!
//! # fn main() -> umc_template::error::Result<()> {
//! let descriptor = ModuleDescriptor::load(Path::new("umc.json"))?;
//! let endpoints = Endpoints::from_env();
//! let working_dir = Path::new(".");
//!
//! let scm = GitSourceControl;
//! let resolver = VersionResolver::new(&scm, &endpoints, working_dir);
//! let locator = ArtifactLocator::new(&endpoints, working_dir);
//! let resolution = Resolution::resolve(
//!     &descriptor,
//!     VariantKey::new("1.12.2", Loader::Forge),
//!     &resolver,
//!     &locator,
//!     VariableDialect::Shadow,
//! )?;
//!
//! let gradle = template::substitute("version = '#VERSION#'", &resolution.variables, true);
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod git;
pub mod loader;
mod resolve;
pub mod resolver;
pub mod temp;
pub mod template;
pub mod variables;

#[cfg(test)]
pub(crate) mod test_support;

pub use artifact::{ArtifactLocator, ArtifactRef};
pub use config::Endpoints;
pub use descriptor::ModuleDescriptor;
pub use git::GitSourceControl;
pub use loader::{Loader, VariantKey};
pub use resolve::Resolution;
pub use resolver::{SourceControl, VersionResolver};
pub use variables::{ResolvedVariables, Variable, VariableDialect, VariableTableBuilder};
