//! RenderProfile - named rendering variants

use serde::{Deserialize, Serialize};

use super::{Color, EffectiveAction, Palette, SubjectKind};

/// Rendering profile.
///
/// - `Classic`: footer with the author, no extra fields, opened is green,
///   commits listed only for pull request updates and merges.
/// - `Detailed`: author block, `State`/`Assignee` fields, opened is info
///   blue, commits listed for every pull request action that emits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RenderProfile {
    #[default]
    Classic,
    Detailed,
}

impl RenderProfile {
    pub fn opened_color(self) -> Color {
        match self {
            RenderProfile::Classic => Color::Success,
            RenderProfile::Detailed => Color::Info,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            RenderProfile::Classic => Palette::CLASSIC,
            RenderProfile::Detailed => Palette::DETAILED,
        }
    }

    /// Whether `State` and `Assignee` fields are rendered
    pub fn verbose_fields(self) -> bool {
        matches!(self, RenderProfile::Detailed)
    }

    /// Whether a commit summary should be attached for this action
    pub fn summarizes_commits(self, kind: SubjectKind, action: EffectiveAction) -> bool {
        if kind != SubjectKind::PullRequest {
            return false;
        }
        match action {
            EffectiveAction::Updated | EffectiveAction::Merged => true,
            EffectiveAction::Opened | EffectiveAction::Edited => {
                matches!(self, RenderProfile::Detailed)
            }
            EffectiveAction::Closed => false,
        }
    }
}

impl std::fmt::Display for RenderProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderProfile::Classic => write!(f, "classic"),
            RenderProfile::Detailed => write!(f, "detailed"),
        }
    }
}

impl std::str::FromStr for RenderProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(RenderProfile::Classic),
            "detailed" => Ok(RenderProfile::Detailed),
            _ => Err(format!("Unknown render profile: {}", s)),
        }
    }
}
