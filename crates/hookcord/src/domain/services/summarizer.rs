//! Commit Summarizer
//!
//! Fetches a pull request's commit listing and renders it as a bulleted
//! block for the `Commits` field.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Commit;
use crate::domain::errors::DomainError;
use crate::ports::CommitFetcher;

/// Render commits one per line, in the order given
pub fn render_commits(commits: &[Commit]) -> String {
    commits
        .iter()
        .map(Commit::bullet)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Commit summarizer over an injected fetcher
pub struct CommitSummarizer<F: CommitFetcher + ?Sized> {
    fetcher: Arc<F>,
}

impl<F: CommitFetcher + ?Sized> CommitSummarizer<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Fetch and render the commits listed at `url`.
    ///
    /// The result is not length-capped; the builder's truncation pass does that.
    pub async fn summarize(&self, url: &str) -> Result<String, DomainError> {
        let body = self.fetcher.fetch(url).await?;
        let commits: Vec<Commit> = serde_json::from_slice(&body)
            .map_err(|e| DomainError::CommitFetch(format!("Invalid commit listing: {}", e)))?;

        debug!(url = %url, count = commits.len(), "Fetched commits");

        Ok(render_commits(&commits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticFetcher(Result<Vec<u8>, String>);

    #[async_trait]
    impl CommitFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, DomainError> {
            self.0.clone().map_err(DomainError::CommitFetch)
        }
    }

    fn listing(n: usize) -> Vec<u8> {
        let commits: Vec<_> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "sha": format!("{:040x}", i + 0xabcdef),
                    "html_url": format!("https://github.com/o/r/commit/{i}"),
                    "commit": { "message": format!("Change {i}\n\nDetails") },
                    "author": { "login": "alice" }
                })
            })
            .collect();
        serde_json::to_vec(&commits).unwrap()
    }

    #[tokio::test]
    async fn test_renders_one_line_per_commit_in_order() {
        let summarizer = CommitSummarizer::new(Arc::new(StaticFetcher(Ok(listing(3)))));

        let text = summarizer.summarize("https://api/commits").await.unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("• Change {i} [")));
            let sha = line.split('[').nth(1).unwrap().split(']').next().unwrap();
            assert_eq!(sha.len(), 8);
            assert!(line.ends_with(&format!("(https://github.com/o/r/commit/{i})")));
        }
    }

    #[tokio::test]
    async fn test_empty_listing_renders_empty_text() {
        let summarizer = CommitSummarizer::new(Arc::new(StaticFetcher(Ok(b"[]".to_vec()))));
        assert_eq!(summarizer.summarize("u").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let summarizer =
            CommitSummarizer::new(Arc::new(StaticFetcher(Err("connection refused".into()))));
        let err = summarizer.summarize("u").await.unwrap_err();
        assert!(matches!(err, DomainError::CommitFetch(_)));
    }

    #[tokio::test]
    async fn test_decode_failure_is_reported() {
        let body = br#"{"message":"Not Found"}"#.to_vec();
        let summarizer = CommitSummarizer::new(Arc::new(StaticFetcher(Ok(body))));
        let err = summarizer.summarize("u").await.unwrap_err();
        assert!(matches!(err, DomainError::CommitFetch(_)));
    }

    #[tokio::test]
    async fn test_works_over_trait_objects() {
        let fetcher: Arc<dyn CommitFetcher> = Arc::new(StaticFetcher(Ok(listing(1))));
        let summarizer = CommitSummarizer::new(fetcher);
        assert_eq!(summarizer.summarize("u").await.unwrap().lines().count(), 1);
    }
}
