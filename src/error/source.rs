//! Version resolution and source tree errors

use super::UmcError;

/// Creates an invalid version error
pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> UmcError {
    UmcError::InvalidVersion {
        version: version.into(),
        reason: reason.into(),
    }
}

/// Creates a version not found error
pub fn version_not_found(path: impl Into<String>) -> UmcError {
    UmcError::VersionNotFound { path: path.into() }
}

/// Creates a source unavailable error
pub fn source_unavailable(source_desc: impl Into<String>, reason: impl Into<String>) -> UmcError {
    UmcError::SourceUnavailable {
        source_desc: source_desc.into(),
        reason: reason.into(),
    }
}

/// Creates a temporary directory error
pub fn temp_dir_error(reason: impl Into<String>) -> UmcError {
    UmcError::TempDirError {
        reason: reason.into(),
    }
}
