//! Remote URL normalization for libgit2

use std::borrow::Cow;

/// Rewrite SCP-style remotes (`git@host:owner/repo.git`) to `ssh://git@host/owner/repo.git`.
pub fn normalize_remote_url(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host, path)) => {
            let path = path.strip_prefix('/').unwrap_or(path);
            Cow::Owned(format!("ssh://{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Whether a remote points at the local filesystem, where shallow fetches are unsupported.
pub fn is_local_remote(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || std::path::Path::new(url).is_absolute()
}
