//! Process-boundary configuration.

use std::env;

/// Name of the environment variable holding the GitHub credential.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Configuration sourced once at process start.
///
/// The credential is read here and passed explicitly into the host check;
/// nothing else reads the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bearer credential for GitHub API requests, if present.
    pub github_token: Option<String>,
}

impl Config {
    /// Read configuration from the environment, honoring a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(env::var(TOKEN_VAR).ok())
    }

    /// Build a config from a raw variable lookup; empty values count as unset.
    #[must_use]
    pub fn from_lookup(token: Option<String>) -> Self {
        Self { github_token: token.filter(|t| !t.is_empty()) }
    }
}
