//! Replaying adapters that replay recorded interactions.

pub mod filesystem;
pub mod git;
pub mod host;

pub use filesystem::ReplayingFileSystem;
pub use git::ReplayingGitRepo;
pub use host::ReplayingCodeHost;

/// Extract a `Result` from a cassette output value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`, the convention the
/// recording adapters write.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
