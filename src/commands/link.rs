//! The link command: resolve a local path to a GitHub URL and print it.

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::link::lines::LineRange;
use crate::link::resolve;

/// Execute the link command with the given service context.
///
/// # Errors
///
/// Returns the resolver's diagnostic as a string when any step fails.
pub fn run_with_context(ctx: &ServiceContext, cli: &Cli) -> Result<(), String> {
    let lines =
        cli.lines.as_deref().map(LineRange::parse).transpose().map_err(|e| e.to_string())?;
    let config = Config::from_env();

    // The one network call runs on a current-thread runtime.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    let url = runtime
        .block_on(resolve::resolve_link(ctx, &config, &cli.file_path, lines.as_ref()))
        .map_err(|e| e.to_string())?;

    println!("{url}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;

    use super::run_with_context;
    use crate::cassette::config::CassetteConfig;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cli::Cli;
    use crate::context::ServiceContext;

    #[test]
    fn invalid_line_spec_fails_before_touching_any_port() {
        // All ports panic when called; the line spec must be rejected first.
        let ctx = ServiceContext::replaying_from(&CassetteConfig::panic_on_unspecified()).unwrap();
        let cli = Cli::parse_from(["ghlink", "src/a.py", "--lines", "1,2,3"]);
        let result = run_with_context(&ctx, &cli);
        assert!(result.unwrap_err().contains("invalid line spec"));
    }

    #[test]
    fn resolves_replayed_invocation_end_to_end() {
        let interactions = vec![
            ("fs", "exists", json!(true)),
            ("fs", "canonicalize", json!({"ok": "/repo/src/a.py"})),
            ("git", "toplevel", json!({"ok": "/repo"})),
            ("git", "remote_url", json!({"ok": "git@github.com:acme/widgets.git"})),
            ("git", "current_branch", json!({"ok": "main"})),
            ("git", "head_commit", json!({"ok": "abc123"})),
            ("git", "remote_tracking_commit", json!({"ok": "abc123"})),
            ("git", "tree_contains", json!({"ok": true})),
            ("host", "blob_exists", json!({"ok": true})),
        ];
        let cassette = Cassette {
            name: "cli-link".into(),
            recorded_at: chrono::Utc::now(),
            head: "abc123".into(),
            interactions: interactions
                .into_iter()
                .enumerate()
                .map(|(seq, (port, method, output))| Interaction {
                    seq: seq as u64,
                    port: port.into(),
                    method: method.into(),
                    input: json!({}),
                    output,
                })
                .collect(),
        };

        let yaml = serde_yaml::to_string(&cassette).unwrap();
        let dir = std::env::temp_dir().join("ghlink_cli_link_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("link.cassette.yaml");
        std::fs::write(&path, &yaml).unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        let cli = Cli::parse_from(["ghlink", "src/a.py", "-l", "10,20"]);
        let result = run_with_context(&ctx, &cli);
        assert!(result.is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
