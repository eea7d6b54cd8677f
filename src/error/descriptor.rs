//! Descriptor errors

use super::UmcError;

/// Creates a malformed descriptor error
pub fn malformed(message: impl Into<String>) -> UmcError {
    UmcError::MalformedDescriptor {
        message: message.into(),
    }
}

/// Creates a missing field error
pub fn missing_field(field: impl Into<String>) -> UmcError {
    UmcError::MissingField {
        field: field.into(),
    }
}

/// Creates a descriptor read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> UmcError {
    UmcError::DescriptorReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
