//! Filesystem port for local path queries.

use std::path::{Path, PathBuf};

/// Provides read-only filesystem queries.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns the canonical, absolute form of the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be resolved.
    fn canonicalize(
        &self,
        path: &Path,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;
}
