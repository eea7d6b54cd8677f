//! End-to-end resolution of one variant

use tracing::info;

use crate::artifact::{ArtifactLocator, ArtifactRef};
use crate::descriptor::ModuleDescriptor;
use crate::error::Result;
use crate::loader::VariantKey;
use crate::resolver::VersionResolver;
use crate::variables::{ResolvedVariables, VariableDialect, VariableTableBuilder};

/// Everything resolved for one variant of a mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub variant: VariantKey,
    pub version: String,
    pub artifact: ArtifactRef,
    pub variables: ResolvedVariables,
}

impl Resolution {
    /// Resolve the core library version, locate its jar and build the variable table
    ///
    /// Stops at the first failing step; no table is produced unless every
    /// step succeeds.
    pub fn resolve(
        descriptor: &ModuleDescriptor,
        variant: VariantKey,
        resolver: &VersionResolver<'_>,
        locator: &ArtifactLocator<'_>,
        dialect: VariableDialect,
    ) -> Result<Self> {
        let version = resolver.resolve(&descriptor.core, &variant)?;
        let artifact = locator.locate(&descriptor.core, &variant, &version)?;
        let variables = VariableTableBuilder::new(descriptor, &variant)
            .dialect(dialect)
            .endpoints(locator.endpoints())
            .build(&version, &artifact)?;

        info!(variant = %variant, %version, "resolved");
        Ok(Self {
            variant,
            version,
            artifact,
            variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::Endpoints;
    use crate::error::UmcError;
    use crate::loader::Loader;
    use crate::resolver::fake::FakeSourceControl;
    use crate::test_support::{create_temp_dir, init_test_logging};

    fn descriptor(umc: &str) -> ModuleDescriptor {
        ModuleDescriptor::from_json(&format!(
            r#"{{
                "mod": {{"pkg": "com.x", "cls": "Mod", "name": "X", "id": "x", "version": "1.0", "dependencies": {{}}}},
                "umc": {umc}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_pinned_remote() {
        init_test_logging(None);
        let scm = FakeSourceControl::with_build_file("");
        let endpoints = Endpoints::default();
        let resolver = VersionResolver::new(&scm, &endpoints, Path::new("/"));
        let locator = ArtifactLocator::new(&endpoints, Path::new("/"));

        let resolution = Resolution::resolve(
            &descriptor(r#"{"version": "2.5"}"#),
            VariantKey::new("1.20", Loader::Forge),
            &resolver,
            &locator,
            VariableDialect::Shadow,
        )
        .unwrap();

        assert_eq!(resolution.version, "2.5");
        assert!(matches!(resolution.artifact, ArtifactRef::RemoteUrl(_)));
        assert_eq!(resolution.variables.get("LOADER_VERSION"), Some("1.20-forge"));
        assert_eq!(
            resolution.variables.get("FORGE_STRING_DEPENDENCIES"),
            Some("required-after:universalmodcore@[2.5, 2.6)")
        );
    }

    #[test]
    fn test_latest_local_checkout() {
        let workspace = create_temp_dir();
        let checkout = workspace.path().join("UniversalModCore");
        let libs = checkout.join("build/libs");
        std::fs::create_dir_all(&libs).unwrap();
        std::fs::write(checkout.join("build.gradle"), "String umcVersion = \"1.3.0\"\n").unwrap();
        let jar = libs.join("UniversalModCore-1.12.2-forge-1.3.0-abcdef1.jar");
        std::fs::write(&jar, b"jar").unwrap();

        let scm = FakeSourceControl::with_build_file("");
        let endpoints = Endpoints::default();
        let resolver = VersionResolver::new(&scm, &endpoints, workspace.path());
        let locator = ArtifactLocator::new(&endpoints, workspace.path());

        let resolution = Resolution::resolve(
            &descriptor(r#"{"version": "latest", "path": "UniversalModCore"}"#),
            VariantKey::new("1.12.2", Loader::Forge),
            &resolver,
            &locator,
            VariableDialect::Legacy,
        )
        .unwrap();

        assert_eq!(resolution.version, "1.3.0-abcdef1");
        assert_eq!(resolution.artifact, ArtifactRef::LocalFile(jar));
        assert_eq!(resolution.variables.get("UMC_API"), Some("1.3"));
        assert!(resolution.variables.contains("UMC_FILE"));
        assert!(resolution.variables.contains("MOD_DEPENDENCIES"));
    }

    #[test]
    fn test_missing_local_jar_aborts() {
        let workspace = create_temp_dir();
        let scm = FakeSourceControl::with_build_file("");
        let endpoints = Endpoints::default();
        let resolver = VersionResolver::new(&scm, &endpoints, workspace.path());
        let locator = ArtifactLocator::new(&endpoints, workspace.path());

        let err = Resolution::resolve(
            &descriptor(r#"{"version": "1.3.0", "path": "UniversalModCore"}"#),
            VariantKey::new("1.12.2", Loader::Forge),
            &resolver,
            &locator,
            VariableDialect::Shadow,
        )
        .unwrap_err();
        assert!(matches!(err, UmcError::ArtifactNotFound { .. }));
    }
}
