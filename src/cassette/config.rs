//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Each port can optionally have its own
/// cassette file for replay. Ports without a cassette path will panic
/// if called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the git port cassette file.
    pub git: Option<PathBuf>,
    /// Path to the filesystem port cassette file.
    pub fs: Option<PathBuf>,
    /// Path to the code-host port cassette file.
    pub host: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the git port.
    pub git: Option<CassetteReplayer>,
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the code-host port.
    pub host: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config where all port paths are `None`. Any port called
    /// during replay will panic because no cassette is loaded.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Load a monolithic cassette file and create a single replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_monolithic(path: &Path) -> Result<CassetteReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            git: self.git.as_deref().map(Self::load_monolithic).transpose()?,
            fs: self.fs.as_deref().map(Self::load_monolithic).transpose()?,
            host: self.host.as_deref().map(Self::load_monolithic).transpose()?,
        })
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
    fn panic_on_unspecified_returns_all_none() {
        let config = CassetteConfig::panic_on_unspecified();
        assert!(config.git.is_none());
        assert!(config.fs.is_none());
        assert!(config.host.is_none());
    }

    #[test]
    fn load_monolithic_cassette() {
        let dir = std::env::temp_dir().join("ghlink_config_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        write_cassette(
            &path,
            vec![
                Interaction {
                    seq: 0,
                    port: "git".into(),
                    method: "current_branch".into(),
                    input: json!({"root": "/repo"}),
                    output: json!({"ok": "main"}),
                },
                Interaction {
                    seq: 1,
                    port: "host".into(),
                    method: "blob_exists".into(),
                    input: json!({"path": "src/a.py"}),
                    output: json!({"ok": true}),
                },
            ],
        );

        let mut replayer = CassetteConfig::load_monolithic(&path).unwrap();
        let i1 = replayer.next_interaction("git", "current_branch");
        assert_eq!(i1.output, json!({"ok": "main"}));
        let i2 = replayer.next_interaction("host", "blob_exists");
        assert_eq!(i2.output, json!({"ok": true}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = std::env::temp_dir().join("ghlink_config_test_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let git_path = dir.join("git.cassette.yaml");
        write_cassette(
            &git_path,
            vec![Interaction {
                seq: 0,
                port: "git".into(),
                method: "head_commit".into(),
                input: json!({"root": "/repo"}),
                output: json!({"ok": "abc123"}),
            }],
        );

        let fs_path = dir.join("fs.cassette.yaml");
        write_cassette(
            &fs_path,
            vec![Interaction {
                seq: 0,
                port: "fs".into(),
                method: "exists".into(),
                input: json!({"path": "/repo/a.py"}),
                output: json!(true),
            }],
        );

        let config =
            CassetteConfig { git: Some(git_path), fs: Some(fs_path), ..CassetteConfig::default() };

        let mut replayers = config.load_all().unwrap();

        // Git replayer works
        let git = replayers.git.as_mut().unwrap();
        let i1 = git.next_interaction("git", "head_commit");
        assert_eq!(i1.output, json!({"ok": "abc123"}));

        // FS replayer works
        let fs = replayers.fs.as_mut().unwrap();
        let i2 = fs.next_interaction("fs", "exists");
        assert_eq!(i2.output, json!(true));

        // Unconfigured port is None
        assert!(replayers.host.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_all_with_no_cassettes() {
        let config = CassetteConfig::panic_on_unspecified();
        let replayers = config.load_all().unwrap();
        assert!(replayers.git.is_none());
        assert!(replayers.fs.is_none());
        assert!(replayers.host.is_none());
    }
}
