//! Event Classifier
//!
//! Decides whether a delivery produces a notification and, if so, with
//! which color and effective action.

use crate::domain::entities::{SkipReason, SubjectEvent, WebhookEvent};
use crate::domain::value_objects::{
    Action, Color, EffectiveAction, RenderProfile, SubjectKind, SubjectState,
};

/// Classifier verdict for a decoded event
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    Emit(Emit<'a>),
    Skip(SkipReason),
}

/// A delivery that should produce a notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emit<'a> {
    pub target: SubjectEvent<'a>,
    pub color: Color,
    pub action: EffectiveAction,
}

/// Resolve color and effective action for an issue / pull request action.
///
/// Returns `None` for actions the relay does not render.
pub fn resolve_action(
    profile: RenderProfile,
    kind: SubjectKind,
    action: &Action,
    state: SubjectState,
    merged: bool,
) -> Option<(Color, EffectiveAction)> {
    match action {
        Action::Opened => Some((profile.opened_color(), EffectiveAction::Opened)),
        Action::Closed if kind == SubjectKind::PullRequest && merged => {
            Some((Color::Merged, EffectiveAction::Merged))
        }
        Action::Closed => Some((Color::Danger, EffectiveAction::Closed)),
        // an edit can arrive after the subject was closed
        Action::Edited if state == SubjectState::Closed => {
            Some((Color::Danger, EffectiveAction::Closed))
        }
        Action::Edited => Some((Color::Warning, EffectiveAction::Edited)),
        Action::Synchronize if kind == SubjectKind::PullRequest => {
            Some((Color::Warning, EffectiveAction::Updated))
        }
        Action::Synchronize | Action::Other(_) => None,
    }
}

/// Classify a decoded webhook event
pub fn classify(profile: RenderProfile, event: &WebhookEvent) -> Classification<'_> {
    let Some(target) = event.subject_event() else {
        let reason = match event {
            WebhookEvent::Push(_) => SkipReason::PushIgnored,
            other => SkipReason::UnhandledEvent(other.kind().to_string()),
        };
        return Classification::Skip(reason);
    };

    match resolve_action(
        profile,
        target.kind,
        target.action,
        target.subject.state,
        target.subject.is_merged(),
    ) {
        Some((color, action)) => Classification::Emit(Emit {
            target,
            color,
            action,
        }),
        None => Classification::Skip(SkipReason::UnhandledAction(target.action.to_string())),
    }
}
