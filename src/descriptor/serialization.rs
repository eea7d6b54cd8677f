//! Wire format of the descriptor document
//!
//! The raw structs mirror the JSON field names one-to-one; conversion into the
//! model types enforces the cross-field rules serde cannot express.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::library::{Library, LibrarySource, Relocation};
use super::{CoreLibraryRef, Dependency, Integration, ModInfo, ModuleDescriptor};
use crate::error::{Result, UmcError, malformed_descriptor};

#[derive(Debug, Deserialize)]
pub(super) struct RawDescriptor {
    #[serde(rename = "mod")]
    module: RawMod,
    #[serde(default)]
    integration: Option<RawIntegration>,
    umc: RawUmc,
}

#[derive(Debug, Deserialize)]
struct RawMod {
    pkg: String,
    cls: String,
    name: String,
    id: String,
    version: String,
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    libraries: Vec<RawLibrary>,
}

#[derive(Debug, Deserialize)]
struct RawIntegration {
    repo: String,
    branch: String,
    path: String,
}

#[derive(Debug, Deserialize)]
struct RawUmc {
    version: String,
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLibrary {
    #[serde(default)]
    artifact: Option<String>,
    #[serde(default)]
    repository_type: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(rename = "type")]
    declaration: String,
    #[serde(default)]
    relocate: Option<String>,
    #[serde(default)]
    only_in: Vec<String>,
}

/// A dependency range is either a bare string or `{ "versions": "<range>" }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRange {
    Plain(String),
    Object { versions: String },
}

impl TryFrom<RawDescriptor> for ModuleDescriptor {
    type Error = UmcError;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        Ok(Self {
            module: raw.module.try_into()?,
            integration: raw.integration.map(|i| Integration {
                repository: i.repo,
                branch: i.branch,
                path: i.path,
            }),
            core: CoreLibraryRef {
                version: raw.umc.version,
                path: raw.umc.path.filter(|p| !p.is_empty()).map(PathBuf::from),
            },
        })
    }
}

impl TryFrom<RawMod> for ModInfo {
    type Error = UmcError;

    fn try_from(raw: RawMod) -> Result<Self> {
        let dependencies = raw
            .dependencies
            .into_iter()
            .map(|(id, value)| {
                let versions = match serde_json::from_value::<RawRange>(value) {
                    Ok(RawRange::Plain(versions) | RawRange::Object { versions }) => versions,
                    Err(_) => {
                        return Err(malformed_descriptor(format!(
                            "dependency '{id}' must be a version range string or an object with `versions`"
                        )));
                    }
                };
                Ok(Dependency { id, versions })
            })
            .collect::<Result<Vec<_>>>()?;

        let libraries = raw
            .libraries
            .into_iter()
            .map(Library::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package: raw.pkg,
            class: raw.cls,
            name: raw.name,
            id: raw.id,
            version: raw.version,
            dependencies,
            libraries,
        })
    }
}

impl TryFrom<RawLibrary> for Library {
    type Error = UmcError;

    fn try_from(raw: RawLibrary) -> Result<Self> {
        let source = match (raw.path, raw.artifact) {
            (Some(path), _) => {
                if raw.repository.is_some() || raw.repository_type.is_some() {
                    return Err(malformed_descriptor(format!(
                        "library '{path}' declares a path and a repository; use one or the other"
                    )));
                }
                LibrarySource::File { path }
            }
            (None, Some(artifact)) => {
                let repository = raw.repository.ok_or_else(|| {
                    malformed_descriptor(format!("library '{artifact}' is missing `repository`"))
                })?;
                match raw.repository_type.as_deref() {
                    None | Some("URL") => LibrarySource::Maven {
                        repository,
                        artifact,
                    },
                    Some("Dir") => LibrarySource::FlatDir {
                        directory: repository,
                        artifact,
                    },
                    Some(other) => {
                        return Err(malformed_descriptor(format!(
                            "library '{artifact}' has repositoryType '{other}'; it needs to be either \"URL\" or \"Dir\""
                        )));
                    }
                }
            }
            (None, None) => {
                return Err(malformed_descriptor(
                    "library needs either an `artifact` or a `path`",
                ));
            }
        };

        let relocation = raw.relocate.as_deref().map(Relocation::parse).transpose()?;

        Ok(Self {
            source,
            declaration: raw.declaration,
            relocation,
            only_in: raw.only_in,
        })
    }
}
