//! HTTP Commit Fetcher
//!
//! Retrieves pull request commit listings from the GitHub API using reqwest.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use hookcord::{CommitFetchConfig, CommitFetcher, DomainError};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP implementation of CommitFetcher
pub struct HttpCommitFetcher {
    client: Client,
    token: Option<String>,
}

impl HttpCommitFetcher {
    pub fn new(config: &CommitFetchConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DomainError::CommitFetch(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl CommitFetcher for HttpCommitFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DomainError> {
        let mut request = self.client.get(url).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::CommitFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::CommitFetch(format!(
                "GET {url} returned {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::CommitFetch(format!("Failed to read body: {e}")))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_commit_fetch_error() {
        let config = CommitFetchConfig {
            timeout: Duration::from_secs(1),
            ..CommitFetchConfig::default()
        };
        let fetcher = HttpCommitFetcher::new(&config).unwrap();

        let err = fetcher
            .fetch("http://127.0.0.1:1/repos/o/r/pulls/1/commits")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CommitFetch(_)));
    }
}
