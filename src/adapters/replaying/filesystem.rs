//! Replaying adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        self.next_output("exists").as_bool().expect("fs::exists: expected boolean output")
    }

    fn canonicalize(
        &self,
        _path: &Path,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("canonicalize"), "fs::canonicalize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            head: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replaying_fs_exists() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "exists".into(),
            input: json!({"path": "/repo/a.py"}),
            output: json!(true),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        assert!(fs.exists(Path::new("/repo/a.py")));
    }

    #[test]
    fn replaying_fs_canonicalize() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "canonicalize".into(),
            input: json!({"path": "a.py"}),
            output: json!({"ok": "/repo/a.py"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        assert_eq!(fs.canonicalize(Path::new("a.py")).unwrap(), PathBuf::from("/repo/a.py"));
    }

    #[test]
    fn replaying_fs_canonicalize_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "canonicalize".into(),
            input: json!({"path": "missing.py"}),
            output: json!({"err": "No such file or directory"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.canonicalize(Path::new("missing.py"));
        assert!(result.is_err());
    }
}
