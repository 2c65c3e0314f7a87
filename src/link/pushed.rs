//! Push-state verification against the remote-tracking branch.

use crate::ports::git::GitRepo;

use super::resolve::RepositoryContext;

/// Outcome of a push-state check.
///
/// Externally every non-`Pushed` outcome collapses into one "not pushed"
/// diagnostic; the variant is retained for tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushState {
    /// HEAD matches the remote-tracking tip and the file is in its tree.
    Pushed,
    /// The local HEAD commit is not the remote-tracking tip.
    HeadMismatch {
        /// Local HEAD commit hash.
        local: String,
        /// Remote-tracking tip commit hash.
        remote: String,
    },
    /// Commits match, but the file is absent from the remote-tracking tree.
    MissingFromRemoteTree,
    /// A lookup failed (missing tracking ref, unborn HEAD, git failure).
    LookupFailed(String),
}

impl PushState {
    /// `true` only for [`PushState::Pushed`].
    #[must_use]
    pub fn is_pushed(&self) -> bool {
        matches!(self, Self::Pushed)
    }
}

/// Check whether `path` is part of the pushed state of the active branch.
///
/// Two conditions, both required: the local HEAD commit equals the tip of
/// the remote-tracking ref, and `path` names a blob in that tip's tree.
/// Every lookup failure degrades to a non-pushed state rather than a
/// distinct error.
pub fn check(git: &dyn GitRepo, repo: &RepositoryContext, path: &str) -> PushState {
    let Some(local) = repo.head.as_deref() else {
        return PushState::LookupFailed("HEAD has no commit".to_string());
    };

    let remote_tip = match git.remote_tracking_commit(&repo.root, &repo.remote, &repo.branch) {
        Ok(tip) => tip,
        Err(e) => return PushState::LookupFailed(e.to_string()),
    };

    if local != remote_tip {
        return PushState::HeadMismatch { local: local.to_string(), remote: remote_tip };
    }

    match git.tree_contains(&repo.root, &remote_tip, path) {
        Ok(true) => PushState::Pushed,
        Ok(false) => PushState::MissingFromRemoteTree,
        Err(e) => PushState::LookupFailed(e.to_string()),
    }
}
