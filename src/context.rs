//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::replaying::{ReplayingCodeHost, ReplayingFileSystem, ReplayingGitRepo};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::host::{BlobCheckFuture, BlobQuery, CodeHost};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Git repository for version-control queries.
    pub git: Box<dyn GitRepo>,
    /// Filesystem for local path queries.
    pub fs: Box<dyn FileSystem>,
    /// Code host for remote existence checks.
    pub host: Box<dyn CodeHost>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::host::LiveCodeHost;

        Self {
            git: Box::new(LiveGitRepo),
            fs: Box::new(LiveFileSystem),
            host: Box::new(LiveCodeHost::new()),
        }
    }

    /// Creates a recording context that captures all interactions.
    ///
    /// Uses live adapters for actual work; per-port cassettes are written
    /// under `<dir>/<timestamp>/` when the returned session is finished.
    /// Drop the context before finishing the session so the recorder
    /// references are released.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(dir: std::path::PathBuf) -> Result<(Self, RecordingSession), String> {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::host::LiveCodeHost;
        use crate::adapters::recording::filesystem::RecordingFileSystem;
        use crate::adapters::recording::git::RecordingGitRepo;
        use crate::adapters::recording::host::RecordingCodeHost;

        let session = RecordingSession::new_in(dir)?;
        let ctx = Self {
            git: Box::new(RecordingGitRepo::new(Box::new(LiveGitRepo), Arc::clone(&session.git))),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
            host: Box::new(RecordingCodeHost::new(
                Box::new(LiveCodeHost::new()),
                Arc::clone(&session.host),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer from the same cassette so that
    /// per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self {
            git: Box::new(ReplayingGitRepo::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            host: Box::new(ReplayingCodeHost::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter
    /// that fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            git: match replayers.git {
                Some(r) => Box::new(ReplayingGitRepo::new(r)),
                None => Box::new(PanickingGitRepo),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            host: match replayers.host {
                Some(r) => Box::new(ReplayingCodeHost::new(r)),
                None => Box::new(PanickingCodeHost),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingGitRepo;
impl GitRepo for PanickingGitRepo {
    fn toplevel(
        &self,
        _path: &Path,
    ) -> Result<std::path::PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn remote_url(
        &self,
        _root: &Path,
        _remote: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn current_branch(
        &self,
        _root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn head_commit(
        &self,
        _root: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn remote_tracking_commit(
        &self,
        _root: &Path,
        _remote: &str,
        _branch: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
    fn tree_contains(
        &self,
        _root: &Path,
        _commit: &str,
        _path: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        panic!("GitRepo port not configured in CassetteConfig — no cassette loaded for git");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
    fn canonicalize(
        &self,
        _path: &Path,
    ) -> Result<std::path::PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig — no cassette loaded for fs");
    }
}

struct PanickingCodeHost;
impl CodeHost for PanickingCodeHost {
    fn blob_exists(&self, _query: &BlobQuery, _token: Option<&str>) -> BlobCheckFuture<'_> {
        panic!("CodeHost port not configured in CassetteConfig — no cassette loaded for host");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            head: "abc".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("ghlink_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        write_cassette(
            &path,
            vec![
                Interaction {
                    seq: 0,
                    port: "git".into(),
                    method: "head_commit".into(),
                    input: json!({"root": "/repo"}),
                    output: json!({"ok": "abc123"}),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "exists".into(),
                    input: json!({"path": "/repo/a.py"}),
                    output: json!(true),
                },
            ],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.git.head_commit(Path::new("/repo")).unwrap(), "abc123");
        assert!(ctx.fs.exists(Path::new("/repo/a.py")));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_from_per_port_cassettes() {
        let dir = std::env::temp_dir().join("ghlink_ctx_test_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let git_path = dir.join("git.cassette.yaml");
        write_cassette(
            &git_path,
            vec![Interaction {
                seq: 0,
                port: "git".into(),
                method: "current_branch".into(),
                input: json!({"root": "/repo"}),
                output: json!({"ok": "main"}),
            }],
        );

        let config = CassetteConfig { git: Some(git_path), ..CassetteConfig::default() };
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        assert_eq!(ctx.git.current_branch(Path::new("/repo")).unwrap(), "main");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let config = CassetteConfig::panic_on_unspecified();
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        let _ = ctx.git.head_commit(Path::new("/repo"));
    }
}
