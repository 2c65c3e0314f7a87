//! Git repository port for version-control queries.

use std::path::{Path, PathBuf};

/// Provides read access to a git repository.
///
/// Abstracting git access allows deterministic replay and testing
/// without requiring a real repository.
pub trait GitRepo: Send + Sync {
    /// Returns the absolute path of the repository root enclosing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not inside a git working copy.
    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the configured URL of the named remote.
    ///
    /// # Errors
    ///
    /// Returns an error if no remote with that name is configured.
    fn remote_url(
        &self,
        root: &Path,
        remote: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the name of the currently checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD is detached and no branch is checked out.
    fn current_branch(
        &self,
        root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the hash of the current HEAD commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits.
    fn head_commit(&self, root: &Path)
        -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the tip commit hash of the remote-tracking ref for `branch`.
    ///
    /// # Errors
    ///
    /// Returns an error if no remote-tracking ref exists for the branch.
    fn remote_tracking_commit(
        &self,
        root: &Path,
        remote: &str,
        branch: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if `path` names a blob in the tree of `commit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself cannot be performed.
    fn tree_contains(
        &self,
        root: &Path,
        commit: &str,
        path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
