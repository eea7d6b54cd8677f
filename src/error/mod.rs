//! Error types and handling for umc-template
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Descriptor parsing and validation errors
//! - [`source`]: Version resolution and source tree errors
//! - [`fs`]: File system, template and artifact errors

pub mod descriptor;
pub mod fs;
pub mod source;

pub use descriptor::{
    malformed as malformed_descriptor, missing_field, read_failed as descriptor_read_failed,
};
pub use fs::{io_error, write_failed as file_write_failed};
pub use source::{
    invalid_version, source_unavailable, temp_dir_error, version_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for descriptor resolution and template rendering
#[derive(Error, Diagnostic, Debug)]
pub enum UmcError {
    // Descriptor errors
    #[error("Malformed descriptor: {message}")]
    #[diagnostic(
        code(umc::descriptor::malformed),
        help("Check the descriptor against the expected `mod`, `integration` and `umc` sections")
    )]
    MalformedDescriptor { message: String },

    #[error("Missing variable {field} in config")]
    #[diagnostic(
        code(umc::descriptor::missing_field),
        help("Required descriptor fields must be present and non-empty")
    )]
    MissingField { field: String },

    #[error("Failed to read descriptor: {path}: {reason}")]
    #[diagnostic(code(umc::descriptor::read_failed))]
    DescriptorReadFailed { path: String, reason: String },

    #[error("Unsupported loader: {loader}")]
    #[diagnostic(
        code(umc::descriptor::unsupported_loader),
        help("Supported loaders: forge, neoforge, fabric, quilt")
    )]
    UnsupportedLoader { loader: String },

    // Version resolution errors
    #[error("Invalid core library version '{version}': {reason}")]
    #[diagnostic(
        code(umc::version::invalid),
        help("Core library versions must start with numeric <major>.<minor>")
    )]
    InvalidVersion { version: String, reason: String },

    #[error("No version marker found in {path}")]
    #[diagnostic(
        code(umc::version::not_found),
        help("The core library build file must contain a `String umcVersion = \"...\"` line")
    )]
    VersionNotFound { path: String },

    #[error("Source tree unavailable: {source_desc}: {reason}")]
    #[diagnostic(
        code(umc::source::unavailable),
        help("Check that the repository URL and branch exist and are reachable")
    )]
    SourceUnavailable { source_desc: String, reason: String },

    #[error("Temporary directory error: {reason}")]
    #[diagnostic(code(umc::source::temp_dir))]
    TempDirError { reason: String },

    // Artifact errors
    #[error("Unable to find core library jar: {path}")]
    #[diagnostic(
        code(umc::artifact::not_found),
        help("Build the core library at the configured path before resolving against it")
    )]
    ArtifactNotFound { path: String },

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(umc::artifact::network))]
    NetworkError { url: String, reason: String },

    // Variable table errors
    #[error("Duplicate variable: {name}")]
    #[diagnostic(code(umc::variables::duplicate))]
    DuplicateVariable { name: String },

    #[error("Variable table is missing {name}")]
    #[diagnostic(code(umc::variables::missing))]
    MissingVariable { name: String },

    // File system errors
    #[error("Failed to decode template {path}: {reason}")]
    #[diagnostic(code(umc::fs::decode_failed), help("Templates must be UTF-8 text"))]
    TemplateDecodeFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(umc::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(umc::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for UmcError {
    fn from(err: std::io::Error) -> Self {
        UmcError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for UmcError {
    fn from(err: serde_json::Error) -> Self {
        UmcError::MalformedDescriptor {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for UmcError {
    fn from(err: serde_yaml::Error) -> Self {
        UmcError::MalformedDescriptor {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for UmcError {
    fn from(err: git2::Error) -> Self {
        UmcError::SourceUnavailable {
            source_desc: "git".to_string(),
            reason: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UmcError>;
