//! Remote URL parsing.

use crate::error::LinkError;

/// Owner and repository name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name with any `.git` suffix stripped.
    pub repo: String,
}

/// Parse a remote URL into owner and repository name.
///
/// Handles both SSH-style (`git@github.com:owner/repo.git`) and HTTPS-style
/// (`https://github.com/owner/repo.git`) forms: the substring after the last
/// `:` is split on `/` and the last two segments are taken. Parsing stays
/// deliberately lenient beyond that — the host is never validated.
///
/// # Errors
///
/// Returns [`LinkError::MalformedRemoteUrl`] when fewer than two `/`-segments
/// follow the last colon, or when the owner or repository segment is empty.
pub fn parse(url: &str) -> Result<RemoteIdentity, LinkError> {
    let malformed = || LinkError::MalformedRemoteUrl { url: url.to_string() };

    let after_colon = url.rsplit(':').next().unwrap_or(url);
    let mut segments = after_colon.rsplit('/');

    let last = segments.next().unwrap_or_default();
    let repo = last.strip_suffix(".git").unwrap_or(last);
    let owner = segments.next().ok_or_else(malformed)?;

    if owner.is_empty() || repo.is_empty() {
        return Err(malformed());
    }

    Ok(RemoteIdentity { owner: owner.to_string(), repo: repo.to_string() })
}
