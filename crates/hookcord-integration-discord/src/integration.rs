//! NotificationSink implementation for Discord

use async_trait::async_trait;
use hookcord::{Credentials, DomainError, Notification, NotificationSink, Palette, SinkFactory};
use tracing::debug;

use crate::client::{parse_channel_id, DiscordClient};
use crate::config::DiscordConfig;
use crate::embed::to_message;

/// Discord integration implementing NotificationSink trait
pub struct DiscordIntegration {
    client: DiscordClient,
    config: DiscordConfig,
}

impl DiscordIntegration {
    /// Create a new Discord integration
    pub fn new(config: DiscordConfig) -> Self {
        let client = DiscordClient::new(&config);
        Self { client, config }
    }
}

#[async_trait]
impl NotificationSink for DiscordIntegration {
    async fn deliver(
        &self,
        notification: &Notification,
        channel_id: &str,
    ) -> Result<(), DomainError> {
        let channel = parse_channel_id(channel_id)?;
        debug!(
            channel_id = %channel,
            title = %notification.title,
            fields = notification.fields.len(),
            "Posting notification to Discord"
        );

        self.client
            .send_message(channel, to_message(notification, &self.config.palette))
            .await
            .map_err(|e| DomainError::Delivery(format!("Discord API error: {}", e)))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "discord"
    }
}

/// Builds a fresh [`DiscordIntegration`] per delivery
#[derive(Debug, Clone, Default)]
pub struct DiscordSinkFactory {
    palette: Palette,
}

impl DiscordSinkFactory {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl SinkFactory for DiscordSinkFactory {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn NotificationSink>, DomainError> {
        if credentials.bot_token.trim().is_empty() {
            return Err(DomainError::Transport("Discord bot token is empty".into()));
        }
        parse_channel_id(&credentials.channel_id)?;

        let config = DiscordConfig::new(credentials.bot_token.trim()).with_palette(self.palette);
        Ok(Box::new(DiscordIntegration::new(config)))
    }
}
