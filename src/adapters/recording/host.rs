//! Recording adapter for the `CodeHost` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::host::{BlobCheckFuture, BlobQuery, CodeHost};

/// Records host interactions while delegating to an inner implementation.
pub struct RecordingCodeHost {
    inner: Box<dyn CodeHost>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCodeHost {
    /// Creates a new recording code host wrapping the given implementation.
    pub fn new(inner: Box<dyn CodeHost>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CodeHost for RecordingCodeHost {
    fn blob_exists(&self, query: &BlobQuery, token: Option<&str>) -> BlobCheckFuture<'_> {
        let fut = self.inner.blob_exists(query, token);
        // The credential itself never lands in a cassette.
        let input = json!({"query": query, "authenticated": token.is_some()});
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = fut.await;
            record_result(&recorder, "host", "blob_exists", &input, &result);
            result
        })
    }
}
