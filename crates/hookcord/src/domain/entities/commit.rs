//! Commit - record returned by the pull request commits listing

use serde::{Deserialize, Serialize};

/// Number of sha characters shown in summaries
pub const SHORT_SHA_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

impl Commit {
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    /// First line of the commit message
    pub fn headline(&self) -> &str {
        self.commit.message.lines().next().unwrap_or("").trim()
    }

    /// `• <headline> [<sha8>](<url>)`
    pub fn bullet(&self) -> String {
        format!(
            "• {} [{}]({})",
            self.headline(),
            self.short_sha(),
            self.html_url
        )
    }
}
