//! Assembles the variable table for one variant

use std::path::MAIN_SEPARATOR_STR;

use tracing::{debug, warn};

use super::api_version::ApiVersion;
use super::forge::{self, CORE_MOD_ID, TomlDependencies};
use super::libraries;
use super::schema::{Variable, VariableDialect};
use super::table::ResolvedVariables;
use crate::artifact::{ARTIFACT_COORDINATE, ArtifactRef};
use crate::config::Endpoints;
use crate::descriptor::{Dependency, ModuleDescriptor};
use crate::error::{Result, UmcError, missing_field};
use crate::loader::VariantKey;

/// Builds [`ResolvedVariables`] from a descriptor and the resolved core library
///
/// Building does no I/O: the version and artifact location are resolved
/// beforehand and passed in.
pub struct VariableTableBuilder<'a> {
    descriptor: &'a ModuleDescriptor,
    variant: &'a VariantKey,
    dialect: VariableDialect,
    endpoints: Endpoints,
}

impl<'a> VariableTableBuilder<'a> {
    pub fn new(descriptor: &'a ModuleDescriptor, variant: &'a VariantKey) -> Self {
        Self {
            descriptor,
            variant,
            dialect: VariableDialect::default(),
            endpoints: Endpoints::default(),
        }
    }

    #[must_use]
    pub fn dialect(mut self, dialect: VariableDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Maven host used for `UMC_REPO` when the artifact is remote
    #[must_use]
    pub fn endpoints(mut self, endpoints: &Endpoints) -> Self {
        self.endpoints = endpoints.clone();
        self
    }

    /// Build the table for `version`, with the jar at `artifact`
    ///
    /// # Errors
    ///
    /// `MissingField` when a required `mod` field is blank, `InvalidVersion`
    /// when `version` does not start with numeric `<major>.<minor>`.
    pub fn build(&self, version: &str, artifact: &ArtifactRef) -> Result<ResolvedVariables> {
        let module = &self.descriptor.module;
        let package = required("mod.package", &module.package)?;
        let class = required("mod.class", &module.class)?;
        let name = required("mod.name", &module.name)?;
        let id = required("mod.id", &module.id)?;
        let mod_version = required("mod.version", &module.version)?;
        let version = required("umc.version", version)?;

        let api = ApiVersion::parse(version)?;
        let api_next = api.next()?;
        let variant_key = self.variant.to_string();

        let libs = libraries::render(&module.libraries, &variant_key);

        let mut dependencies = module.dependencies.clone();
        dependencies.push(Dependency {
            id: CORE_MOD_ID.to_string(),
            versions: format!("[{api}, {api_next})"),
        });
        let toml = match forge::toml_dependencies(self.variant.loader, id, &dependencies) {
            TomlDependencies::Unsupported(loader) => {
                warn!(%loader, "no mods.toml dependency format for loader, leaving it empty");
                TomlDependencies::Unsupported(loader)
            }
            rendered => rendered,
        };

        let mut entries = vec![
            (Variable::Package, package.to_string()),
            (Variable::PackagePath, package.replace('.', MAIN_SEPARATOR_STR)),
            (Variable::Class, class.to_string()),
            (Variable::Name, name.to_string()),
            (Variable::Id, id.to_string()),
            (Variable::Version, mod_version.to_string()),
            (Variable::LoaderVersion, variant_key.clone()),
            (Variable::Minecraft, self.variant.minecraft.clone()),
            (Variable::Loader, self.variant.loader.to_string()),
            (Variable::LibRepos, libs.repositories),
            (Variable::LibDependencies, libs.dependencies),
            (Variable::LibRelocations, libs.relocations),
            (Variable::UmcApi, api.to_string()),
            (Variable::UmcApiNext, api_next.to_string()),
            (Variable::UmcVersion, version.to_string()),
        ];
        entries.extend(self.artifact_entries(version, artifact));
        entries.push((
            Variable::ForgeStringDependencies,
            forge::string_dependencies(&dependencies),
        ));
        entries.push((Variable::ForgeTomlDependencies, toml.into_value()));

        debug!(variant = %variant_key, version, "built variable table");
        self.finish(entries)
    }

    /// `UMC_REPO`, `UMC_DEPENDENCY` and one of `UMC_FILE`/`UMC_DOWNLOAD`
    fn artifact_entries(&self, version: &str, artifact: &ArtifactRef) -> Vec<(Variable, String)> {
        match artifact {
            ArtifactRef::LocalFile(jar) => {
                let dir = jar
                    .parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                let stem = jar
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                vec![
                    (Variable::UmcRepo, format!("flatDir {{ dirs '{dir}' }}")),
                    (Variable::UmcDependency, format!("name: '{stem}'")),
                    (Variable::UmcFile, jar.display().to_string()),
                ]
            }
            ArtifactRef::RemoteUrl(url) => vec![
                (
                    Variable::UmcRepo,
                    format!("maven {{ url = \"{}\" }}", self.endpoints.maven_base()),
                ),
                (
                    Variable::UmcDependency,
                    format!("'{ARTIFACT_COORDINATE}:{}-{version}'", self.variant),
                ),
                (Variable::UmcDownload, url.clone()),
            ],
        }
    }

    /// Check the schema and publish the entries under this dialect's names
    fn finish(&self, entries: Vec<(Variable, String)>) -> Result<ResolvedVariables> {
        let count = |variable: Variable| entries.iter().filter(|(v, _)| *v == variable).count();

        for variable in Variable::REQUIRED {
            if count(variable) != 1 {
                return Err(UmcError::MissingVariable {
                    name: variable.name(self.dialect).to_string(),
                });
            }
        }
        let sources: usize = Variable::ARTIFACT_SOURCE.iter().map(|v| count(*v)).sum();
        if sources != 1 {
            return Err(UmcError::MissingVariable {
                name: "UMC_FILE or UMC_DOWNLOAD".to_string(),
            });
        }

        ResolvedVariables::from_pairs(
            entries
                .into_iter()
                .map(|(variable, value)| (variable.name(self.dialect), value)),
        )
    }
}

fn required<'v>(field: &str, value: &'v str) -> Result<&'v str> {
    if value.trim().is_empty() {
        return Err(missing_field(field));
    }
    Ok(value)
}
