//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

/// Run a git command with `-C <dir>` and return trimmed stdout.
fn git_stdout(
    dir: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("git").arg("-C").arg(dir).args(args).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {stderr}", args.join(" ")).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

impl GitRepo for LiveGitRepo {
    fn toplevel(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        // `git -C` needs a directory; for a file, start from its parent.
        let dir = if path.is_dir() { path } else { path.parent().unwrap_or(path) };
        Ok(PathBuf::from(git_stdout(dir, &["rev-parse", "--show-toplevel"])?))
    }

    fn remote_url(
        &self,
        root: &Path,
        remote: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        git_stdout(root, &["remote", "get-url", remote])
    }

    fn current_branch(
        &self,
        root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        git_stdout(root, &["symbolic-ref", "--short", "HEAD"])
    }

    fn head_commit(
        &self,
        root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        git_stdout(root, &["rev-parse", "HEAD"])
    }

    fn remote_tracking_commit(
        &self,
        root: &Path,
        remote: &str,
        branch: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let refname = format!("refs/remotes/{remote}/{branch}");
        git_stdout(root, &["rev-parse", "--verify", &refname])
    }

    fn tree_contains(
        &self,
        root: &Path,
        commit: &str,
        path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        // The exit status is the answer; a missing blob is not an error.
        let spec = format!("{commit}:{path}");
        let output =
            Command::new("git").arg("-C").arg(root).args(["cat-file", "-e", &spec]).output()?;
        Ok(output.status.success())
    }
}
