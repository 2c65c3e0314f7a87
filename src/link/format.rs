//! Blob URL assembly.

use super::lines::LineRange;
use super::remote::RemoteIdentity;

/// Base URL of the hosting provider's web UI.
pub const GITHUB_HOST: &str = "https://github.com";

/// Build the blob URL for a file at a branch, with an optional line anchor.
///
/// The path is not percent-encoded; GitHub tolerates the raw form.
#[must_use]
pub fn blob_url(
    identity: &RemoteIdentity,
    branch: &str,
    path: &str,
    lines: Option<&LineRange>,
) -> String {
    let mut url =
        format!("{GITHUB_HOST}/{}/{}/blob/{branch}/{path}", identity.owner, identity.repo);
    if let Some(lines) = lines {
        url.push_str(&lines.fragment());
    }
    url
}
