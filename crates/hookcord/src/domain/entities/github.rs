//! GitHub webhook payloads
//!
//! Only the fields the relay renders are modelled; everything else in the
//! payload is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Action, EventKind, SubjectKind, SubjectState};

/// Host used to derive avatar and profile links
pub const GITHUB_HOST: &str = "https://github.com";

/// A GitHub account as it appears in webhook payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl GitHubUser {
    /// Avatar from the payload, or the `<login>.png` convention when absent
    pub fn avatar(&self) -> String {
        match self.avatar_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("{}/{}.png?size=40", GITHUB_HOST, self.login),
        }
    }

    pub fn profile_url(&self) -> String {
        match self.html_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("{}/{}", GITHUB_HOST, self.login),
        }
    }
}

/// Issue or pull request record.
///
/// GitHub sends the same shape for both; the pull-request-only fields
/// are absent for issues. `merged` may also arrive as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub number: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub state: SubjectState,
    pub user: GitHubUser,
    #[serde(default)]
    pub assignee: Option<GitHubUser>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub merged: Option<bool>,
    #[serde(default)]
    pub commits_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuesEvent {
    pub action: Action,
    pub issue: Subject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub action: Action,
    pub pull_request: Subject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub pusher: Option<Pusher>,
}

/// A decoded webhook delivery
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    Issues(IssuesEvent),
    PullRequest(PullRequestEvent),
    Push(PushEvent),
    /// Event kind the relay does not decode
    Other(String),
}

/// Borrowed view over the subject of an issues / pull_request event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectEvent<'a> {
    pub kind: SubjectKind,
    pub action: &'a Action,
    pub subject: &'a Subject,
}

impl Subject {
    /// Missing and `null` both read as not merged
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}

impl WebhookEvent {
    /// Decode a payload body according to its announced kind.
    ///
    /// Unknown kinds are not decoded at all, so an arbitrary body is accepted.
    pub fn parse(kind: &EventKind, body: &[u8]) -> Result<Self, DomainError> {
        let event = match kind {
            EventKind::Issues => WebhookEvent::Issues(
                serde_json::from_slice(body).map_err(|e| DomainError::malformed(kind.to_string(), e))?,
            ),
            EventKind::PullRequest => WebhookEvent::PullRequest(
                serde_json::from_slice(body).map_err(|e| DomainError::malformed(kind.to_string(), e))?,
            ),
            EventKind::Push => WebhookEvent::Push(
                serde_json::from_slice(body).map_err(|e| DomainError::malformed(kind.to_string(), e))?,
            ),
            EventKind::Other(name) => WebhookEvent::Other(name.clone()),
        };
        Ok(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            WebhookEvent::Issues(_) => EventKind::Issues,
            WebhookEvent::PullRequest(_) => EventKind::PullRequest,
            WebhookEvent::Push(_) => EventKind::Push,
            WebhookEvent::Other(name) => EventKind::Other(name.clone()),
        }
    }

    /// Subject view for issue and pull request events
    pub fn subject_event(&self) -> Option<SubjectEvent<'_>> {
        match self {
            WebhookEvent::Issues(e) => Some(SubjectEvent {
                kind: SubjectKind::Issue,
                action: &e.action,
                subject: &e.issue,
            }),
            WebhookEvent::PullRequest(e) => Some(SubjectEvent {
                kind: SubjectKind::PullRequest,
                action: &e.action,
                subject: &e.pull_request,
            }),
            WebhookEvent::Push(_) | WebhookEvent::Other(_) => None,
        }
    }
}
