//! Remote endpoints the resolver talks to
//!
//! Defaults point at the public core library repository and maven host. Both can
//! be overridden with environment variables:
//! - `UMC_UPSTREAM_REPOSITORY` - git remote cloned for `"latest"` versions
//! - `UMC_MAVEN_URL` - maven base the core library jar is published under

/// Git remote of the core library
pub const DEFAULT_UPSTREAM_REPOSITORY: &str =
    "https://github.com/TeamOpenIndustry/UniversalModCore.git";

/// Maven repository the core library is published to
pub const DEFAULT_MAVEN_URL: &str = "https://teamopenindustry.cc/maven";

pub const UPSTREAM_REPOSITORY_ENV: &str = "UMC_UPSTREAM_REPOSITORY";
pub const MAVEN_URL_ENV: &str = "UMC_MAVEN_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub upstream_repository: String,
    pub maven_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            upstream_repository: DEFAULT_UPSTREAM_REPOSITORY.to_string(),
            maven_url: DEFAULT_MAVEN_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Defaults with environment overrides applied; empty values are ignored
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            upstream_repository: var(UPSTREAM_REPOSITORY_ENV)
                .unwrap_or(defaults.upstream_repository),
            maven_url: var(MAVEN_URL_ENV).unwrap_or(defaults.maven_url),
        }
    }

    /// Maven base without a trailing slash, ready for joining path segments
    pub fn maven_base(&self) -> &str {
        self.maven_url.trim_end_matches('/')
    }
}
