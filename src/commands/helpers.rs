//! Command helper utilities

use std::path::PathBuf;

use tracing::debug;
use umc_template::error::{Result, UmcError};
use umc_template::{
    ArtifactLocator, Endpoints, GitSourceControl, ModuleDescriptor, Resolution, VariableDialect,
    VariantKey, VersionResolver,
};

use crate::cli::{Cli, TargetArgs};

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub workspace: Option<PathBuf>,
    pub endpoints: Endpoints,
}

impl GlobalOptions {
    /// Environment defaults overridden by command line flags
    pub fn from_cli(cli: &Cli) -> Self {
        let mut endpoints = Endpoints::from_env();
        if let Some(upstream) = cli.upstream.clone().filter(|v| !v.trim().is_empty()) {
            endpoints.upstream_repository = upstream;
        }
        if let Some(maven_url) = cli.maven_url.clone().filter(|v| !v.trim().is_empty()) {
            endpoints.maven_url = maven_url;
        }
        Self {
            workspace: cli.workspace.clone(),
            endpoints,
        }
    }
}

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| UmcError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Load the descriptor named by `target` and resolve it for the selected variant
pub fn resolve_target(options: &GlobalOptions, target: &TargetArgs) -> Result<Resolution> {
    let working_dir = resolve_workspace_path(options.workspace.clone())?;
    let descriptor = ModuleDescriptor::load(&target.config)?;
    let variant = VariantKey::new(target.minecraft.trim(), target.loader);
    let dialect = if target.legacy_names {
        VariableDialect::Legacy
    } else {
        VariableDialect::Shadow
    };
    debug!(variant = %variant, working_dir = %working_dir.display(), "resolving");

    let scm = GitSourceControl;
    let resolver = VersionResolver::new(&scm, &options.endpoints, &working_dir);
    let locator = ArtifactLocator::new(&options.endpoints, &working_dir);
    Resolution::resolve(&descriptor, variant, &resolver, &locator, dialect)
}
