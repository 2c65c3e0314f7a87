//! Replaying adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::GitRepo;

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("git", method).output.clone()
    }
}

impl GitRepo for ReplayingGitRepo {
    fn toplevel(&self, _path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("toplevel"), "git::toplevel")
    }

    fn remote_url(
        &self,
        _root: &Path,
        _remote: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("remote_url"), "git::remote_url")
    }

    fn current_branch(
        &self,
        _root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("current_branch"), "git::current_branch")
    }

    fn head_commit(
        &self,
        _root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("head_commit"), "git::head_commit")
    }

    fn remote_tracking_commit(
        &self,
        _root: &Path,
        _remote: &str,
        _branch: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("remote_tracking_commit"), "git::remote_tracking_commit")
    }

    fn tree_contains(
        &self,
        _root: &Path,
        _commit: &str,
        _path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("tree_contains"), "git::tree_contains")
    }
}
