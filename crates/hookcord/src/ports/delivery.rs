//! Notification Delivery Port
//!
//! Abstract interface for handing a notification to a messaging platform.
//!
//! Implementations live in separate crates (e.g. hookcord-integration-discord).

use async_trait::async_trait;

use crate::domain::entities::Notification;
use crate::domain::errors::DomainError;

/// A connected transport able to post notifications
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Post one notification to `channel_id`
    async fn deliver(&self, notification: &Notification, channel_id: &str)
        -> Result<(), DomainError>;

    /// Get the sink name (e.g., "discord")
    fn name(&self) -> &str;
}

/// Builds a sink from per-request credentials.
///
/// A sink lives for a single delivery and is dropped afterwards.
pub trait SinkFactory: Send + Sync {
    /// Validate credentials and construct a sink.
    ///
    /// Fails with [`DomainError::Transport`] when the credentials cannot
    /// produce a usable transport.
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn NotificationSink>, DomainError>;
}

/// Bot credentials and target channel for one delivery
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub channel_id: String,
    pub bot_token: String,
}

impl Credentials {
    pub fn new(channel_id: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            bot_token: bot_token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("channel_id", &self.channel_id)
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_token() {
        let credentials = Credentials::new("123", "secret-token");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("123"));
        assert!(!debug.contains("secret-token"));
    }
}
