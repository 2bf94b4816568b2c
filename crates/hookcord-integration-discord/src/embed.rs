//! Notification to Discord embed conversion

use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage};
use serenity::model::Timestamp;

use hookcord::{Notification, Palette};

/// Convert a notification into an embed, mapping its color through `palette`
pub fn to_embed(notification: &Notification, palette: &Palette) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(notification.title.as_str())
        .colour(palette.rgb(notification.color));

    if let Some(url) = &notification.url {
        embed = embed.url(url.as_str());
    }
    if let Some(description) = &notification.description {
        embed = embed.description(description.as_str());
    }
    if let Some(author) = &notification.author {
        let mut builder = CreateEmbedAuthor::new(author.name.as_str());
        if let Some(icon_url) = &author.icon_url {
            builder = builder.icon_url(icon_url.as_str());
        }
        if let Some(url) = &author.url {
            builder = builder.url(url.as_str());
        }
        embed = embed.author(builder);
    }
    if let Some(footer) = &notification.footer {
        let mut builder = CreateEmbedFooter::new(footer.text.as_str());
        if let Some(icon_url) = &footer.icon_url {
            builder = builder.icon_url(icon_url.as_str());
        }
        embed = embed.footer(builder);
    }
    for field in &notification.fields {
        embed = embed.field(field.name.as_str(), field.value.as_str(), field.inline);
    }
    if let Some(timestamp) = notification
        .timestamp
        .and_then(|ts| Timestamp::from_unix_timestamp(ts.timestamp()).ok())
    {
        embed = embed.timestamp(timestamp);
    }

    embed
}

/// Build the outgoing message: header line plus a single embed
pub fn to_message(notification: &Notification, palette: &Palette) -> CreateMessage {
    let mut message = CreateMessage::new().embed(to_embed(notification, palette));
    if let Some(content) = &notification.content {
        message = message.content(content.as_str());
    }
    message
}
