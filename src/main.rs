//! Binary entrypoint for the `ghlink` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording is handled in commands::dispatch via GHLINK_RECORD=<dir>.
    match ghlink::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Diagnostics share stdout with the resolved URL.
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
