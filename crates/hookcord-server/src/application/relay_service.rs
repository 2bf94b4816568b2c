//! Relay Application Service (Use Case)
//!
//! Orchestrates one webhook delivery: decode, classify, build, optionally
//! summarize commits, and hand off to a per-request sink.

use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, info, warn};

use hookcord::domain::services::{build, classify, Classification, CommitSummarizer, Emit};
use hookcord::{
    CommitFetcher, Credentials, DomainError, EventKind, Notification, Outcome, RenderProfile,
    SinkFactory, SkipReason, WebhookEvent,
};

/// Invocation-level failures
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("missing X-GitHub-Event header")]
    MissingHeader,

    #[error("{0}")]
    MalformedPayload(String),

    #[error("invalid webhook signature")]
    InvalidSignature,

    #[error("transport construction failed: {0}")]
    TransportConstruction(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingHeader | RelayError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::InvalidSignature => StatusCode::UNAUTHORIZED,
            RelayError::TransportConstruction(_) | RelayError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for RelayError {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::MalformedPayload { .. } => RelayError::MalformedPayload(e.to_string()),
            DomainError::Transport(msg) => RelayError::TransportConstruction(msg.clone()),
            DomainError::Delivery(msg) | DomainError::CommitFetch(msg) => {
                RelayError::Delivery(msg.clone())
            }
        }
    }
}

/// Result of rendering a delivery, before any transport is involved
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Skip(SkipReason),
    Notify(Notification),
}

/// Application service for relaying webhook deliveries
pub struct RelayService {
    profile: RenderProfile,
    summarizer: CommitSummarizer<dyn CommitFetcher>,
    sinks: Arc<dyn SinkFactory>,
}

impl RelayService {
    pub fn new(
        profile: RenderProfile,
        fetcher: Arc<dyn CommitFetcher>,
        sinks: Arc<dyn SinkFactory>,
    ) -> Self {
        Self {
            profile,
            summarizer: CommitSummarizer::new(fetcher),
            sinks,
        }
    }

    pub fn profile(&self) -> RenderProfile {
        self.profile
    }

    /// Decode and classify a payload, building its notification if one is due
    pub async fn render(&self, kind: &EventKind, body: &[u8]) -> Result<Rendered, RelayError> {
        let event = WebhookEvent::parse(kind, body)?;

        let emit = match classify(self.profile, &event) {
            Classification::Emit(emit) => emit,
            Classification::Skip(reason) => {
                info!(event = %kind, reason = %reason, "Skipping webhook event");
                return Ok(Rendered::Skip(reason));
            }
        };

        let commits = self.commit_summary(&emit).await;
        Ok(Rendered::Notify(build(self.profile, &emit, commits)))
    }

    /// Fetch failures are logged and the field is left out
    async fn commit_summary(&self, emit: &Emit<'_>) -> Option<String> {
        if !self
            .profile
            .summarizes_commits(emit.target.kind, emit.action)
        {
            return None;
        }
        let Some(url) = emit.target.subject.commits_url.as_deref() else {
            debug!("Pull request payload has no commits_url");
            return None;
        };

        match self.summarizer.summarize(url).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to fetch commits, sending without them");
                None
            }
        }
    }

    /// Process one delivery end to end.
    ///
    /// Credentials are only required when there is something to send. The
    /// sink is created here and dropped before returning.
    pub async fn relay(
        &self,
        kind: &EventKind,
        body: &[u8],
        credentials: Option<&Credentials>,
    ) -> Result<Outcome, RelayError> {
        let notification = match self.render(kind, body).await? {
            Rendered::Skip(reason) => return Ok(Outcome::skipped(reason)),
            Rendered::Notify(notification) => notification,
        };

        let credentials = credentials.ok_or_else(|| {
            RelayError::TransportConstruction("no Discord channel id and bot token configured".into())
        })?;
        let sink = self.sinks.connect(credentials)?;

        sink.deliver(&notification, &credentials.channel_id).await?;

        info!(
            event = %kind,
            sink = sink.name(),
            title = %notification.title,
            "Notification delivered"
        );
        Ok(Outcome::Delivered)
    }
}
