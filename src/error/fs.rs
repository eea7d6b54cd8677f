//! File system errors

use super::UmcError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> UmcError {
    UmcError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> UmcError {
    UmcError::IoError {
        message: message.into(),
    }
}
