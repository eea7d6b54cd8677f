//! Core library artifact location and download
//!
//! The core library jar is either a build output of a local checkout
//! (`<path>/build/libs/...`) or published on the maven host. Both use the same
//! file naming convention, derived from the variant key and resolved version.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Endpoints;
use crate::descriptor::CoreLibraryRef;
use crate::error::{Result, UmcError, file_write_failed};
use crate::loader::VariantKey;

/// Maven group and artifact of the core library
pub const ARTIFACT_COORDINATE: &str = "cam72cam.universalmodcore:UniversalModCore";

/// Directory of local build outputs inside a core library checkout
pub const LOCAL_BUILD_DIR: &str = "build/libs";

/// `UniversalModCore-<variant>-<version>.jar`
pub fn artifact_file_name(variant: &VariantKey, version: &str) -> String {
    format!("UniversalModCore-{variant}-{version}.jar")
}

/// Where the core library jar lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRef {
    LocalFile(PathBuf),
    RemoteUrl(String),
}

impl ArtifactRef {
    /// Open the jar for reading, starting the download for remote artifacts
    pub fn open_stream(&self) -> Result<Box<dyn Read>> {
        match self {
            ArtifactRef::LocalFile(path) => {
                let file = File::open(path).map_err(|e| UmcError::IoError {
                    message: format!("failed to open {}: {e}", path.display()),
                })?;
                Ok(Box::new(file))
            }
            ArtifactRef::RemoteUrl(url) => {
                info!(url, "downloading core library");
                let network_error = |reason: String| UmcError::NetworkError {
                    url: url.clone(),
                    reason,
                };
                let response = reqwest::blocking::get(url)
                    .map_err(|e| network_error(e.to_string()))?
                    .error_for_status()
                    .map_err(|e| network_error(e.to_string()))?;
                Ok(Box::new(response))
            }
        }
    }

    /// Stream the jar into `dest`, creating parent directories; returns bytes written
    pub fn copy_to(&self, dest: &Path) -> Result<u64> {
        let mut reader = self.open_stream()?;

        let write_failed = |e: io::Error| file_write_failed(dest.display().to_string(), e.to_string());
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let mut file = File::create(dest).map_err(write_failed)?;
        // Read errors on a remote body are network failures, not local IO.
        let written = io::copy(&mut reader, &mut file).map_err(|e| match self {
            ArtifactRef::RemoteUrl(url) => UmcError::NetworkError {
                url: url.clone(),
                reason: e.to_string(),
            },
            ArtifactRef::LocalFile(_) => write_failed(e),
        })?;

        debug!(dest = %dest.display(), bytes = written, "copied core library");
        Ok(written)
    }
}

/// Computes [`ArtifactRef`]s for resolved core library versions
pub struct ArtifactLocator<'a> {
    endpoints: &'a Endpoints,
    working_dir: PathBuf,
}

impl<'a> ArtifactLocator<'a> {
    pub fn new(endpoints: &'a Endpoints, working_dir: &Path) -> Self {
        Self {
            endpoints,
            working_dir: working_dir.to_path_buf(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.endpoints
    }

    /// Locate the jar for `variant` at `version`
    ///
    /// # Errors
    ///
    /// `ArtifactNotFound` when the core reference has a local path but the
    /// expected build output does not exist.
    pub fn locate(
        &self,
        core: &CoreLibraryRef,
        variant: &VariantKey,
        version: &str,
    ) -> Result<ArtifactRef> {
        let file_name = artifact_file_name(variant, version);

        match &core.path {
            Some(path) => {
                let jar = self
                    .working_dir
                    .join(path)
                    .join(LOCAL_BUILD_DIR)
                    .join(&file_name);
                if !jar.is_file() {
                    return Err(UmcError::ArtifactNotFound {
                        path: jar.display().to_string(),
                    });
                }
                Ok(ArtifactRef::LocalFile(jar))
            }
            None => Ok(ArtifactRef::RemoteUrl(format!(
                "{}/{}/{variant}-{version}/{file_name}",
                self.endpoints.maven_base(),
                ARTIFACT_COORDINATE.replace(['.', ':'], "/"),
            ))),
        }
    }
}
