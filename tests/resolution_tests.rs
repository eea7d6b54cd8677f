//! Library-level resolution against real git repositories

mod common;

use std::cell::Cell;
use std::path::Path;

use common::{TestWorkspace, create_upstream};
use umc_template::error::{Result, UmcError};
use umc_template::{
    ArtifactLocator, ArtifactRef, Endpoints, GitSourceControl, Loader, ModuleDescriptor,
    Resolution, SourceControl, VariableDialect, VariantKey, VersionResolver, template,
};

fn descriptor(umc: &str) -> ModuleDescriptor {
    ModuleDescriptor::from_json(&format!("{{ {}, \"umc\": {umc} }}", common::MOD_SECTION))
        .unwrap()
}

#[test]
fn test_latest_through_git() {
    let upstream = create_upstream("1.20-neoforge", "2.0.1");
    let endpoints = Endpoints {
        upstream_repository: upstream.url.clone(),
        ..Endpoints::default()
    };
    let scm = GitSourceControl;
    let resolver = VersionResolver::new(&scm, &endpoints, Path::new("/"));
    let locator = ArtifactLocator::new(&endpoints, Path::new("/"));

    let resolution = Resolution::resolve(
        &descriptor(r#"{"version": "latest"}"#),
        VariantKey::new("1.20", Loader::NeoForge),
        &resolver,
        &locator,
        VariableDialect::Shadow,
    )
    .unwrap();

    let revision = resolution.version.strip_prefix("2.0.1-").unwrap();
    assert!(upstream.commit.starts_with(revision));
    assert_eq!(
        resolution.artifact,
        ArtifactRef::RemoteUrl(format!(
            "https://teamopenindustry.cc/maven/cam72cam/universalmodcore/UniversalModCore/\
             1.20-neoforge-{0}/UniversalModCore-1.20-neoforge-{0}.jar",
            resolution.version
        ))
    );
    assert!(
        resolution
            .variables
            .get("FORGE_TOML_DEPENDENCIES")
            .unwrap()
            .contains("type='required'")
    );
}

/// Source control that serves a fixed build file and counts clones
struct CountingSourceControl {
    clones: Cell<usize>,
}

impl SourceControl for CountingSourceControl {
    fn clone_branch(&self, _url: &str, _branch: &str, dest: &Path, shallow: bool) -> Result<()> {
        assert!(shallow);
        self.clones.set(self.clones.get() + 1);
        std::fs::write(dest.join("build.gradle"), "String umcVersion = \"3.1.4\"\n")?;
        Ok(())
    }

    fn revision(&self, _repo_dir: &Path) -> Result<String> {
        Ok("feedbee".to_string())
    }
}

#[test]
fn test_custom_source_control() {
    let scm = CountingSourceControl {
        clones: Cell::new(0),
    };
    let endpoints = Endpoints::default();
    let resolver = VersionResolver::new(&scm, &endpoints, Path::new("/"));
    let locator = ArtifactLocator::new(&endpoints, Path::new("/"));
    let descriptor = descriptor(r#"{"version": "latest"}"#);

    for loader in Loader::ALL {
        let resolution = Resolution::resolve(
            &descriptor,
            VariantKey::new("1.20", loader),
            &resolver,
            &locator,
            VariableDialect::Shadow,
        )
        .unwrap();
        assert_eq!(resolution.version, "3.1.4-feedbee");
        assert_eq!(resolution.variables.get("UMC_API_NEXT"), Some("3.2"));
    }
    assert_eq!(scm.clones.get(), Loader::ALL.len());
}

#[test]
fn test_pinned_version_never_clones() {
    let scm = CountingSourceControl {
        clones: Cell::new(0),
    };
    let workspace = TestWorkspace::new();
    workspace.create_core_jar("umc", "1.16.5-forge", "1.1.0");
    let endpoints = Endpoints::default();
    let resolver = VersionResolver::new(&scm, &endpoints, &workspace.path);
    let locator = ArtifactLocator::new(&endpoints, &workspace.path);

    let resolution = Resolution::resolve(
        &descriptor(r#"{"version": "1.1.0", "path": "umc"}"#),
        VariantKey::new("1.16.5", Loader::Forge),
        &resolver,
        &locator,
        VariableDialect::Shadow,
    )
    .unwrap();

    assert_eq!(scm.clones.get(), 0);
    assert!(matches!(resolution.artifact, ArtifactRef::LocalFile(_)));

    let gradle = template::substitute(
        "repositories {\n    #UMC_REPO#\n}\ndependencies {\n    compile #UMC_DEPENDENCY#\n}",
        &resolution.variables,
        true,
    );
    assert!(gradle.contains("flatDir { dirs '"));
    assert!(gradle.contains("compile name: 'UniversalModCore-1.16.5-forge-1.1.0'"));
}

#[test]
fn test_blank_mod_field_fails_without_table() {
    let scm = GitSourceControl;
    let endpoints = Endpoints::default();
    let resolver = VersionResolver::new(&scm, &endpoints, Path::new("/"));
    let locator = ArtifactLocator::new(&endpoints, Path::new("/"));
    let descriptor = ModuleDescriptor::from_json(
        r#"{"mod": {"pkg": "", "cls": "Mod", "name": "X", "id": "x", "version": "1.0"},
            "umc": {"version": "2.5"}}"#,
    )
    .unwrap();

    let err = Resolution::resolve(
        &descriptor,
        VariantKey::new("1.20", Loader::Forge),
        &resolver,
        &locator,
        VariableDialect::Shadow,
    )
    .unwrap_err();
    assert!(matches!(err, UmcError::MissingField { field } if field == "mod.package"));
}
