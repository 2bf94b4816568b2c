//! Commit Fetch Port
//!
//! Abstract interface for retrieving a pull request's commit listing.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::DomainError;

/// Raw HTTP fetch capability.
///
/// Implementations perform a single GET and return the body bytes; decoding
/// stays in the domain so it can be tested without a network.
///
/// # Example
///
/// ```rust,ignore
/// use hookcord::ports::CommitFetcher;
///
/// struct HttpCommitFetcher { /* reqwest client */ }
///
/// #[async_trait]
/// impl CommitFetcher for HttpCommitFetcher {
///     async fn fetch(&self, url: &str) -> Result<Vec<u8>, DomainError> {
///         // GET url, fail on non-2xx
///     }
/// }
/// ```
#[async_trait]
pub trait CommitFetcher: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// Transport failures, timeouts and non-success statuses are reported
    /// as [`DomainError::CommitFetch`].
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DomainError>;
}

/// Configuration for commit fetching
#[derive(Debug, Clone)]
pub struct CommitFetchConfig {
    /// Upper bound for a single fetch
    pub timeout: Duration,
    /// User-Agent header value (required by the GitHub API)
    pub user_agent: String,
    /// Optional API token to lift anonymous rate limits
    pub token: Option<String>,
}

impl Default for CommitFetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: format!("hookcord/{}", env!("CARGO_PKG_VERSION")),
            token: None,
        }
    }
}
