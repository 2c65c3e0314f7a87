//! Live GitHub adapter using the repository contents API.

use reqwest::{Client, StatusCode};

use crate::ports::host::{BlobCheckFuture, BlobQuery, CodeHost};

const GITHUB_API_URL: &str = "https://api.github.com";

/// The GitHub API rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("ghlink/", env!("CARGO_PKG_VERSION"));

/// Live code host that queries the GitHub contents API.
pub struct LiveCodeHost {
    client: Client,
}

impl LiveCodeHost {
    /// Creates a new live GitHub client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveCodeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHost for LiveCodeHost {
    fn blob_exists(&self, query: &BlobQuery, token: Option<&str>) -> BlobCheckFuture<'_> {
        let url = format!(
            "{GITHUB_API_URL}/repos/{}/{}/contents/{}?ref={}",
            query.owner, query.repo, query.path, query.branch
        );
        let token = token.map(str::to_owned);

        Box::pin(async move {
            let mut request = self.client.get(&url).header("User-Agent", USER_AGENT);
            if let Some(token) = token {
                request = request.header("Authorization", format!("token {token}"));
            }

            let response = request.send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("GitHub API request failed: {e}").into()
                },
            )?;

            // Strictly 200 means visible; every other status is a uniform "no".
            Ok(response.status() == StatusCode::OK)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::USER_AGENT;

    #[test]
    fn user_agent_carries_the_crate_version() {
        assert!(USER_AGENT.starts_with("ghlink/"));
        assert!(USER_AGENT.len() > "ghlink/".len());
    }
}
