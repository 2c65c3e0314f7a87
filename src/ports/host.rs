//! Code-host port for remote existence checks.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`CodeHost`] to keep the trait dyn-compatible.
pub type BlobCheckFuture<'a> =
    Pin<Box<dyn Future<Output = Result<bool, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Identifies one file at one branch of one hosted repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobQuery {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name without a `.git` suffix.
    pub repo: String,
    /// Branch the lookup is scoped to.
    pub branch: String,
    /// Repo-relative, forward-slash separated file path.
    pub path: String,
}

/// Answers whether a file is visible on the hosting provider.
pub trait CodeHost: Send + Sync {
    /// Returns `true` if the host serves the queried file at the given branch.
    ///
    /// `token` is an optional bearer credential; without it the check runs
    /// unauthenticated and may be rate limited.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures. A negative answer
    /// from the host (404, 403, 429, ...) is `Ok(false)`.
    fn blob_exists(&self, query: &BlobQuery, token: Option<&str>) -> BlobCheckFuture<'_>;
}
