//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed {event} payload: {reason}")]
    MalformedPayload { event: String, reason: String },

    #[error("Commit fetch failed: {0}")]
    CommitFetch(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl DomainError {
    pub fn malformed<T: AsRef<str>>(event: T, reason: impl std::fmt::Display) -> Self {
        Self::MalformedPayload {
            event: event.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }
}
