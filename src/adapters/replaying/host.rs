//! Replaying adapter for the `CodeHost` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::host::{BlobCheckFuture, BlobQuery, CodeHost};

/// Serves recorded host answers from a cassette.
pub struct ReplayingCodeHost {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingCodeHost {
    /// Creates a new replaying code host from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl CodeHost for ReplayingCodeHost {
    fn blob_exists(&self, _query: &BlobQuery, _token: Option<&str>) -> BlobCheckFuture<'_> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("host", "blob_exists").output.clone()
        };
        Box::pin(async move { replay_result(&output, "host::blob_exists") })
    }
}
