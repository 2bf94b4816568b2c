//! EventKind - GitHub event discriminator

/// Event kind announced by the `X-GitHub-Event` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Issues,
    PullRequest,
    Push,
    /// Any event this relay does not render (ping, release, ...)
    Other(String),
}

impl EventKind {
    /// Classify a raw header value. Never fails: unknown kinds become `Other`.
    pub fn from_header(value: &str) -> Self {
        match value.trim() {
            "issues" => Self::Issues,
            "pull_request" => Self::PullRequest,
            "push" => Self::Push,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Issues => write!(f, "issues"),
            EventKind::PullRequest => write!(f, "pull_request"),
            EventKind::Push => write!(f, "push"),
            EventKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Kind of subject (issue or pull request) a notification describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Issue,
    PullRequest,
}

impl SubjectKind {
    /// Human-readable label used in headers and verb-phrase titles
    pub fn label(self) -> &'static str {
        match self {
            SubjectKind::Issue => "Issue",
            SubjectKind::PullRequest => "Pull request",
        }
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header() {
        assert_eq!(EventKind::from_header("issues"), EventKind::Issues);
        assert_eq!(EventKind::from_header("pull_request"), EventKind::PullRequest);
        assert_eq!(EventKind::from_header("push"), EventKind::Push);
        assert_eq!(
            EventKind::from_header("ping"),
            EventKind::Other("ping".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_header() {
        for header in ["issues", "pull_request", "push", "release"] {
            assert_eq!(EventKind::from_header(header).to_string(), header);
        }
    }
}
