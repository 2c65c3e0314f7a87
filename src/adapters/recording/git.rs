//! Recording adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::git::GitRepo;

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl GitRepo for RecordingGitRepo {
    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.toplevel(path);
        let input = json!({"path": path.display().to_string()});
        record_result(&self.recorder, "git", "toplevel", &input, &result);
        result
    }

    fn remote_url(
        &self,
        root: &Path,
        remote: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.remote_url(root, remote);
        let input = json!({"root": root.display().to_string(), "remote": remote});
        record_result(&self.recorder, "git", "remote_url", &input, &result);
        result
    }

    fn current_branch(
        &self,
        root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.current_branch(root);
        let input = json!({"root": root.display().to_string()});
        record_result(&self.recorder, "git", "current_branch", &input, &result);
        result
    }

    fn head_commit(
        &self,
        root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.head_commit(root);
        let input = json!({"root": root.display().to_string()});
        record_result(&self.recorder, "git", "head_commit", &input, &result);
        result
    }

    fn remote_tracking_commit(
        &self,
        root: &Path,
        remote: &str,
        branch: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.remote_tracking_commit(root, remote, branch);
        let input = json!({
            "root": root.display().to_string(),
            "remote": remote,
            "branch": branch,
        });
        record_result(&self.recorder, "git", "remote_tracking_commit", &input, &result);
        result
    }

    fn tree_contains(
        &self,
        root: &Path,
        commit: &str,
        path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.tree_contains(root, commit, path);
        let input = json!({
            "root": root.display().to_string(),
            "commit": commit,
            "path": path,
        });
        record_result(&self.recorder, "git", "tree_contains", &input, &result);
        result
    }
}
