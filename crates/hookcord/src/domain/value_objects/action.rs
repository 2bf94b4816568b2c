//! Action - webhook action verbs and their corrected form

use serde::{Deserialize, Serialize};

/// Raw `action` field of an issues / pull_request payload.
///
/// The set of verbs GitHub sends is open-ended, so anything not listed
/// here is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Opened,
    Closed,
    Edited,
    Synchronize,
    Other(String),
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        match value.as_str() {
            "opened" => Action::Opened,
            "closed" => Action::Closed,
            "edited" => Action::Edited,
            "synchronize" => Action::Synchronize,
            _ => Action::Other(value),
        }
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        Action::from(value.to_string())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Opened => write!(f, "opened"),
            Action::Closed => write!(f, "closed"),
            Action::Edited => write!(f, "edited"),
            Action::Synchronize => write!(f, "synchronize"),
            Action::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Action after the state correction rules have been applied
/// (edited after close -> closed, merged close -> merged, synchronize -> updated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveAction {
    Opened,
    Closed,
    Edited,
    Merged,
    Updated,
}

impl EffectiveAction {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveAction::Opened => "opened",
            EffectiveAction::Closed => "closed",
            EffectiveAction::Edited => "edited",
            EffectiveAction::Merged => "merged",
            EffectiveAction::Updated => "updated",
        }
    }

    /// Subject state implied by this action
    pub fn state_label(self) -> &'static str {
        match self {
            EffectiveAction::Opened | EffectiveAction::Edited | EffectiveAction::Updated => "open",
            EffectiveAction::Closed => "closed",
            EffectiveAction::Merged => "merged",
        }
    }

    /// Closed and merged subjects carry no body
    pub fn shows_body(self) -> bool {
        !matches!(self, EffectiveAction::Closed | EffectiveAction::Merged)
    }
}

impl std::fmt::Display for EffectiveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of an issue or pull request at delivery time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubjectState {
    #[default]
    Open,
    Closed,
}
