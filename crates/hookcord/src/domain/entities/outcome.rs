//! Outcome - how a single webhook delivery was resolved

use serde::{Deserialize, Serialize};

/// Why a delivery produced no message. Skips are successes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Issue / pull request action the relay does not render
    UnhandledAction(String),
    /// Push events are accepted but not rendered
    PushIgnored,
    /// Event kind the relay does not render
    UnhandledEvent(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnhandledAction(action) => {
                write!(f, "Don't care about this action ({}).", action)
            }
            Self::PushIgnored => write!(f, "Push events are accepted but not relayed."),
            Self::UnhandledEvent(event) => {
                write!(f, "We don't care about this event ({}), all is good.", event)
            }
        }
    }
}

/// Successful resolution of one delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Skipped { reason: SkipReason },
    Delivered,
}

impl Outcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Short human-readable response body
    pub fn message(&self) -> String {
        match self {
            Outcome::Skipped { reason } => reason.to_string(),
            Outcome::Delivered => "Ok!".to_string(),
        }
    }
}
