//! Notification Builder
//!
//! Assembles a [`Notification`] from a classified event. Pure: the only
//! side effect is logging from body normalization.

use crate::domain::entities::{EmbedAuthor, EmbedFooter, Notification};
use crate::domain::services::classifier::Emit;
use crate::domain::services::markdown;
use crate::domain::value_objects::RenderProfile;

pub const STATE_FIELD: &str = "State";
pub const ASSIGNEE_FIELD: &str = "Assignee";
pub const COMMITS_FIELD: &str = "Commits";

/// `<Kind> <action> by <login>`, e.g. "Pull request merged by bob"
pub fn headline(emit: &Emit<'_>) -> String {
    format!(
        "{} {} by {}",
        emit.target.kind.label(),
        emit.action,
        emit.target.subject.user.login
    )
}

/// Build the notification for an emitted event.
///
/// `commits` is a pre-rendered commit summary; empty summaries are ignored.
pub fn build(profile: RenderProfile, emit: &Emit<'_>, commits: Option<String>) -> Notification {
    let subject = emit.target.subject;
    let author = &subject.user;
    let headline = headline(emit);

    let title = match subject.number {
        Some(number) => format!("#{} {}", number, subject.title),
        None => headline.clone(),
    };

    let mut notification = Notification::new(title, emit.color)
        .with_url(subject.html_url.clone())
        .with_content(headline);

    notification = match profile {
        RenderProfile::Classic => {
            notification.with_footer(EmbedFooter::new(author.login.clone()).with_icon(author.avatar()))
        }
        RenderProfile::Detailed => notification
            .with_author(EmbedAuthor {
                name: author.login.clone(),
                icon_url: Some(author.avatar()),
                url: Some(author.profile_url()),
            })
            .with_footer(EmbedFooter::new(emit.target.kind.label())),
    };

    if emit.action.shows_body() {
        if let Some(body) = subject.body.as_deref().filter(|b| !b.trim().is_empty()) {
            notification = notification.with_description(markdown::normalize(body));
        }
    }

    if profile.verbose_fields() {
        notification = notification.with_field(STATE_FIELD, emit.action.state_label(), true);
        if let Some(assignee) = &subject.assignee {
            notification = notification.with_field(ASSIGNEE_FIELD, assignee.login.clone(), true);
        }
    }

    if let Some(commits) = commits.filter(|c| !c.trim().is_empty()) {
        notification = notification.with_field(COMMITS_FIELD, commits, false);
    }

    if let Some(updated_at) = subject.updated_at {
        notification = notification.with_timestamp(updated_at);
    }

    notification.truncate()
}
