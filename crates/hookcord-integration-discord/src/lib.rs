//! Discord Integration for hookcord
//!
//! This crate posts hookcord notifications to a Discord channel through the
//! bot HTTP API. No gateway connection is held: each delivery builds its own
//! client and drops it when done.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookcord::{Credentials, Palette, SinkFactory};
//! use hookcord_integration_discord::DiscordSinkFactory;
//!
//! let factory = DiscordSinkFactory::new(Palette::CLASSIC);
//! let sink = factory.connect(&Credentials::new("123456789012345678", "bot-token"))?;
//! sink.deliver(&notification, "123456789012345678").await?;
//! ```

mod client;
mod config;
mod embed;
mod integration;

pub use client::{parse_channel_id, DiscordClient};
pub use config::DiscordConfig;
pub use embed::{to_embed, to_message};
pub use integration::{DiscordIntegration, DiscordSinkFactory};
