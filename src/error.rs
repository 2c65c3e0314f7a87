//! Crate-level error types for link resolution.

use crate::link::pushed::PushState;

/// All the ways resolving a link can fail.
///
/// Each variant renders as the exact diagnostic line the user sees. Variants
/// carry enough context (paths, branch names, the push-state cause) for tests
/// and logs without changing the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// No enclosing git repository was found from the given path.
    #[error("not a git repository: {path}")]
    NotARepository {
        /// Path the search started from.
        path: String,
    },

    /// The repository has no remote with the expected name.
    #[error("no remote named '{remote}' configured")]
    NoRemoteConfigured {
        /// Remote name that was looked up.
        remote: String,
    },

    /// The remote URL does not contain an owner and repository segment.
    #[error("malformed remote url: {url}")]
    MalformedRemoteUrl {
        /// The remote URL as configured.
        url: String,
    },

    /// No branch is checked out, so there is no branch to link against.
    #[error("detached HEAD: no branch is checked out")]
    DetachedHead,

    /// The target path does not exist on disk.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path as given on the command line.
        path: String,
    },

    /// The file is not in the pushed state of the remote-tracking branch.
    ///
    /// Several distinct causes collapse into this one diagnostic; the
    /// underlying [`PushState`] is retained for tests and logs.
    #[error("file '{path}' is not pushed to remote branch '{branch}'")]
    NotPushed {
        /// Repo-relative path of the file.
        path: String,
        /// Branch the push state was checked against.
        branch: String,
        /// The verification outcome that triggered this error.
        state: PushState,
    },

    /// GitHub answered the existence check with a non-200 status.
    #[error("file '{path}' does not exist on GitHub in branch '{branch}'")]
    NotOnHost {
        /// Repo-relative path of the file.
        path: String,
        /// Branch the existence check was scoped to.
        branch: String,
    },

    /// The existence check could not be completed at the transport level.
    #[error("GitHub request failed: {reason}")]
    HostRequestFailed {
        /// Description of the transport failure.
        reason: String,
    },

    /// The `--lines` argument is not `"N"` or `"N,M"`.
    #[error("invalid line spec '{spec}': use 'N' or 'N,M'")]
    InvalidLineSpec {
        /// The argument as given.
        spec: String,
    },
}

#[cfg(test)]
mod tests {
    use super::LinkError;
    use crate::link::pushed::PushState;

    #[test]
    fn not_pushed_message_hides_the_cause() {
        let err = LinkError::NotPushed {
            path: "src/a.py".into(),
            branch: "main".into(),
            state: PushState::MissingFromRemoteTree,
        };
        let msg = err.to_string();
        assert_eq!(msg, "file 'src/a.py' is not pushed to remote branch 'main'");
        assert!(!msg.contains("tree"));
    }

    #[test]
    fn line_spec_message_names_the_input() {
        let err = LinkError::InvalidLineSpec { spec: "1,2,3".into() };
        assert_eq!(err.to_string(), "invalid line spec '1,2,3': use 'N' or 'N,M'");
    }
}
