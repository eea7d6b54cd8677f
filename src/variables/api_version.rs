//! Core library API compatibility window

use std::fmt;

use crate::error::{Result, invalid_version};

/// `<major>.<minor>` of a core library version
///
/// Mods declare compatibility with `[major.minor, major.(minor+1))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    /// Take the first two dot-separated components of a resolved version
    ///
    /// Anything after the minor component (patch, revision suffix) is ignored:
    /// `4.12-abcdef1` and `4.12.3` both give `4.12`.
    pub fn parse(version: &str) -> Result<Self> {
        let mut parts = version.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts
            .next()
            .ok_or_else(|| invalid_version(version, "expected <major>.<minor>"))?;
        // A revision or build suffix ends the minor component: "12" in "12-abcdef1".
        let minor = minor.split(['-', '+']).next().unwrap_or_default();

        Ok(Self {
            major: major
                .parse()
                .map_err(|_| invalid_version(version, "major component is not numeric"))?,
            minor: minor
                .parse()
                .map_err(|_| invalid_version(version, "minor component is not numeric"))?,
        })
    }

    /// First incompatible API version
    ///
    /// # Errors
    ///
    /// `InvalidVersion` when the minor component has no successor.
    pub fn next(self) -> Result<Self> {
        let minor = self.minor.checked_add(1).ok_or_else(|| {
            invalid_version(self.to_string(), "minor component is too large to increment")
        })?;
        Ok(Self {
            major: self.major,
            minor,
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
