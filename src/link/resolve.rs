//! Orchestrates link resolution from a local path to a GitHub URL.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::LinkError;
use crate::ports::git::GitRepo;
use crate::ports::host::BlobQuery;

use super::format;
use super::lines::LineRange;
use super::pushed;
use super::remote::{self, RemoteIdentity};

/// Remote every lookup is scoped to.
pub const REMOTE_NAME: &str = "origin";

/// Identity of the repository a link is generated for.
///
/// Derived once per invocation from the local git store; immutable for
/// the run.
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    /// Absolute path of the repository root.
    pub root: PathBuf,
    /// Name of the remote the link targets.
    pub remote: String,
    /// Configured URL of that remote.
    pub remote_url: String,
    /// Owner and repository name parsed from the remote URL.
    pub identity: RemoteIdentity,
    /// Currently checked-out branch.
    pub branch: String,
    /// HEAD commit hash; `None` when the branch has no commit yet.
    pub head: Option<String>,
}

/// Build the repository context for the repository enclosing `start`.
///
/// # Errors
///
/// Returns `NotARepository`, `NoRemoteConfigured`, `MalformedRemoteUrl`, or
/// `DetachedHead` depending on which lookup fails. A missing HEAD commit is
/// not an error here; push-state verification degrades on it instead.
pub fn repository_context(
    git: &dyn GitRepo,
    start: &Path,
) -> Result<RepositoryContext, LinkError> {
    let root = git
        .toplevel(start)
        .map_err(|_| LinkError::NotARepository { path: start.display().to_string() })?;
    let remote_url = git
        .remote_url(&root, REMOTE_NAME)
        .map_err(|_| LinkError::NoRemoteConfigured { remote: REMOTE_NAME.to_string() })?;
    let identity = remote::parse(&remote_url)?;
    let branch = git.current_branch(&root).map_err(|_| LinkError::DetachedHead)?;
    let head = git.head_commit(&root).ok();

    Ok(RepositoryContext {
        root,
        remote: REMOTE_NAME.to_string(),
        remote_url,
        identity,
        branch,
        head,
    })
}

/// Resolve `file_path` to a GitHub blob URL.
///
/// Verifies the file exists locally, is part of the pushed state of the
/// active branch, and is visible through the GitHub contents API, then
/// formats the URL with an optional line anchor.
///
/// # Errors
///
/// Returns the first failing check's [`LinkError`]; no partial output.
pub async fn resolve_link(
    ctx: &ServiceContext,
    config: &Config,
    file_path: &Path,
    lines: Option<&LineRange>,
) -> Result<String, LinkError> {
    if !ctx.fs.exists(file_path) {
        return Err(LinkError::FileNotFound { path: file_path.display().to_string() });
    }
    let abs = ctx
        .fs
        .canonicalize(file_path)
        .map_err(|_| LinkError::FileNotFound { path: file_path.display().to_string() })?;

    let repo = repository_context(ctx.git.as_ref(), &abs)?;
    let rel = repo_relative(&repo.root, &abs);

    let state = pushed::check(ctx.git.as_ref(), &repo, &rel);
    if !state.is_pushed() {
        return Err(LinkError::NotPushed { path: rel, branch: repo.branch.clone(), state });
    }

    if config.github_token.is_none() {
        eprintln!("Warning: GITHUB_TOKEN not set. Unauthenticated requests may be rate limited.");
    }
    let query = BlobQuery {
        owner: repo.identity.owner.clone(),
        repo: repo.identity.repo.clone(),
        branch: repo.branch.clone(),
        path: rel.clone(),
    };
    match ctx.host.blob_exists(&query, config.github_token.as_deref()).await {
        Ok(true) => {}
        Ok(false) => {
            return Err(LinkError::NotOnHost { path: rel, branch: repo.branch.clone() });
        }
        Err(e) => return Err(LinkError::HostRequestFailed { reason: e.to_string() }),
    }

    Ok(format::blob_url(&repo.identity, &repo.branch, &rel, lines))
}

/// Repo-root-relative, forward-slash separated rendition of `abs`.
///
/// A path outside `root` falls through unchanged; the push-state check
/// then fails it as not pushed.
fn repo_relative(root: &Path, abs: &Path) -> String {
    let rel = abs.strip_prefix(root).unwrap_or(abs);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
