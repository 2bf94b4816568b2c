//! Discord API client wrapper

use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::id::ChannelId;
use std::num::NonZeroU64;
use std::sync::Arc;
use tracing::{debug, error};

use hookcord::DomainError;

use crate::config::DiscordConfig;

/// Parse a channel snowflake. Zero and non-numeric ids are rejected.
pub fn parse_channel_id(raw: &str) -> Result<ChannelId, DomainError> {
    raw.trim()
        .parse::<NonZeroU64>()
        .map(ChannelId::from)
        .map_err(|e| DomainError::Transport(format!("Invalid Discord channel id '{}': {}", raw, e)))
}

/// Discord API client
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client. No connection is opened until a request is sent.
    pub fn new(config: &DiscordConfig) -> Self {
        let http = Arc::new(Http::new(&config.token));
        Self { http }
    }

    /// Send a message to a channel
    pub async fn send_message(
        &self,
        channel: ChannelId,
        message: CreateMessage,
    ) -> Result<SerenityMessage, serenity::Error> {
        debug!(channel_id = %channel, "Sending message to Discord");

        let message = channel
            .send_message(&self.http, message)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(message)
    }
}
