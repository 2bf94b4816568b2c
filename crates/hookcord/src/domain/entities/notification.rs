//! Notification - transport-neutral rendering of one webhook delivery

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::truncate::{
    hard_truncate, truncate_text, AUTHOR_NAME_LIMIT, CONTENT_LIMIT, DESCRIPTION_LIMIT,
    FIELD_COUNT_LIMIT, FIELD_NAME_LIMIT, FIELD_VALUE_LIMIT, FOOTER_TEXT_LIMIT, TITLE_LIMIT,
    TOTAL_LIMIT,
};
use crate::domain::value_objects::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

impl EmbedFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }

    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A message ready to hand to a delivery transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Plain header line sent alongside the embed
    pub content: Option<String>,
    pub title: String,
    pub url: Option<String>,
    pub color: Color,
    pub author: Option<EmbedAuthor>,
    pub footer: Option<EmbedFooter>,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            content: None,
            title: title.into(),
            url: None,
            color,
            author: None,
            footer: None,
            description: None,
            fields: Vec::new(),
            timestamp: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Find a field by name
    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Characters counted against the embed-wide size ceiling
    pub fn embed_len(&self) -> usize {
        let count = |s: &str| s.chars().count();
        count(&self.title)
            + self.description.as_deref().map_or(0, count)
            + self.author.as_ref().map_or(0, |a| count(&a.name))
            + self.footer.as_ref().map_or(0, |f| count(&f.text))
            + self
                .fields
                .iter()
                .map(|f| count(&f.name) + count(&f.value))
                .sum::<usize>()
    }

    /// Clamp every part to the embed size ceilings.
    ///
    /// Never fails: oversize text is cut and marked with an ellipsis, the
    /// title is hard-cut, surplus fields are dropped from the end.
    pub fn truncate(mut self) -> Self {
        self.title = hard_truncate(&self.title, TITLE_LIMIT).to_string();
        self.content = self
            .content
            .map(|c| truncate_text(&c, CONTENT_LIMIT).into_owned());
        self.description = self
            .description
            .map(|d| truncate_text(&d, DESCRIPTION_LIMIT).into_owned());

        if let Some(author) = self.author.as_mut() {
            author.name = hard_truncate(&author.name, AUTHOR_NAME_LIMIT).to_string();
        }
        if let Some(footer) = self.footer.as_mut() {
            footer.text = truncate_text(&footer.text, FOOTER_TEXT_LIMIT).into_owned();
        }

        self.fields.truncate(FIELD_COUNT_LIMIT);
        for field in &mut self.fields {
            field.name = truncate_text(&field.name, FIELD_NAME_LIMIT).into_owned();
            field.value = truncate_text(&field.value, FIELD_VALUE_LIMIT).into_owned();
        }

        // title + description + author + footer alone stay under the total
        while self.embed_len() > TOTAL_LIMIT && self.fields.pop().is_some() {}
        debug_assert!(self.embed_len() <= TOTAL_LIMIT);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_applies_all_caps() {
        let mut notification = Notification::new("t".repeat(300), Color::Warning)
            .with_description("word ".repeat(1000))
            .with_footer(EmbedFooter::new("alice"));
        for i in 0..30 {
            notification = notification.with_field(format!("f{i}"), "v".repeat(2000), false);
        }

        let truncated = notification.truncate();

        assert_eq!(truncated.title.chars().count(), TITLE_LIMIT);
        assert!(truncated.description.as_ref().unwrap().chars().count() <= DESCRIPTION_LIMIT);
        assert!(truncated.fields.len() <= FIELD_COUNT_LIMIT);
        assert!(truncated
            .fields
            .iter()
            .all(|f| f.value.chars().count() <= FIELD_VALUE_LIMIT));
        assert!(truncated.embed_len() <= TOTAL_LIMIT);
    }

    #[test]
    fn test_total_overflow_drops_fields_and_keeps_description() {
        let mut notification = Notification::new("t".repeat(TITLE_LIMIT), Color::Info)
            .with_description("d".repeat(DESCRIPTION_LIMIT))
            .with_author(EmbedAuthor {
                name: "a".repeat(AUTHOR_NAME_LIMIT),
                icon_url: None,
                url: None,
            })
            .with_footer(EmbedFooter::new("f".repeat(FOOTER_TEXT_LIMIT)));
        for i in 0..5 {
            notification = notification.with_field(format!("f{i}"), "v".repeat(1000), false);
        }

        let truncated = notification.truncate();

        assert_eq!(
            truncated.description.as_ref().unwrap().chars().count(),
            DESCRIPTION_LIMIT
        );
        assert_eq!(truncated.fields.len(), 1);
        assert_eq!(truncated.fields[0].name, "f0");
        assert!(truncated.embed_len() <= TOTAL_LIMIT);
    }

    #[test]
    fn test_truncate_keeps_small_notification_intact() {
        let notification = Notification::new("#1 Small", Color::Success)
            .with_description("short body")
            .with_field("State", "open", true);

        assert_eq!(notification.clone().truncate(), notification);
    }

    #[test]
    fn test_field_lookup() {
        let notification =
            Notification::new("x", Color::Info).with_field("Commits", "• a [12345678](u)", false);
        assert!(notification.field("Commits").is_some());
        assert!(notification.field("State").is_none());
    }
}
