//! In-memory port implementations and payload fixtures for tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hookcord::{
    CommitFetcher, Credentials, DomainError, Notification, NotificationSink, SinkFactory,
};

/// Fetcher returning a canned commit listing (or failure) and recording URLs
pub struct FakeFetcher {
    response: Result<Vec<u8>, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn commits(n: usize) -> Self {
        let commits: Vec<_> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "sha": format!("{:040x}", 0xfeed_0000_u64 + i as u64),
                    "html_url": format!("https://github.com/o/r/commit/{i}"),
                    "commit": { "message": format!("Commit {i}") }
                })
            })
            .collect();
        Self {
            response: Ok(serde_json::to_vec(&commits).unwrap()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err("connection refused".to_string()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl CommitFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DomainError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.response.clone().map_err(DomainError::CommitFetch)
    }
}

/// Sink factory recording every delivered notification
#[derive(Clone, Default)]
pub struct RecordingSinks {
    delivered: Arc<Mutex<Vec<(Notification, String)>>>,
    fail_delivery: bool,
}

impl RecordingSinks {
    pub fn failing() -> Self {
        Self {
            fail_delivery: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<(Notification, String)> {
        self.delivered.lock().unwrap().clone()
    }
}

impl SinkFactory for RecordingSinks {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn NotificationSink>, DomainError> {
        if credentials.bot_token.is_empty() {
            return Err(DomainError::Transport("empty token".into()));
        }
        Ok(Box::new(RecordingSink {
            delivered: self.delivered.clone(),
            fail_delivery: self.fail_delivery,
        }))
    }
}

struct RecordingSink {
    delivered: Arc<Mutex<Vec<(Notification, String)>>>,
    fail_delivery: bool,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(
        &self,
        notification: &Notification,
        channel_id: &str,
    ) -> Result<(), DomainError> {
        if self.fail_delivery {
            return Err(DomainError::Delivery("channel not found".into()));
        }
        self.delivered
            .lock()
            .unwrap()
            .push((notification.clone(), channel_id.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn issue_payload(action: &str, state: &str, body: &str) -> String {
    serde_json::json!({
        "action": action,
        "issue": {
            "number": 7,
            "title": "Bug X",
            "body": body,
            "url": "https://api.github.com/repos/o/r/issues/7",
            "html_url": "https://github.com/o/r/issues/7",
            "state": state,
            "user": {
                "login": "alice",
                "avatar_url": "https://avatars.githubusercontent.com/u/1",
                "html_url": "https://github.com/alice"
            },
            "assignee": null
        },
        "repository": { "full_name": "o/r" },
        "sender": { "login": "alice" }
    })
    .to_string()
}

pub fn pull_request_payload(action: &str, state: &str, merged: bool) -> String {
    serde_json::json!({
        "action": action,
        "number": 12,
        "pull_request": {
            "number": 12,
            "title": "Add feature",
            "body": "Implements the feature",
            "url": "https://api.github.com/repos/o/r/pulls/12",
            "html_url": "https://github.com/o/r/pull/12",
            "state": state,
            "merged": merged,
            "commits_url": "https://api.github.com/repos/o/r/pulls/12/commits",
            "user": { "login": "alice" },
            "assignee": { "login": "dave" },
            "updated_at": "2024-05-01T12:00:00Z"
        },
        "repository": { "full_name": "o/r" }
    })
    .to_string()
}
