//! Discord configuration

use hookcord::Palette;
use serde::{Deserialize, Serialize};

/// Configuration for the Discord transport
#[derive(Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// RGB values used for notification colors
    pub palette: Palette,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            palette: Palette::default(),
        }
    }

    /// Set the color palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("palette", &self.palette)
            .finish()
    }
}
