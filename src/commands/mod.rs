//! Command dispatch.

pub mod link;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Cli;
use crate::context::ServiceContext;

/// Dispatch the parsed invocation.
///
/// When `GHLINK_RECORD` is set to a directory path, all port interactions are
/// recorded to per-port cassette files under that directory.
///
/// # Errors
///
/// Returns an error string if link resolution fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let (ctx, session) = if let Ok(dir) = env::var("GHLINK_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(dir))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = link::run_with_context(&ctx, cli);

    // Finish recording after the command completes (even on error)
    if let Some(session) = session {
        // Drop the context first to release recorder references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
