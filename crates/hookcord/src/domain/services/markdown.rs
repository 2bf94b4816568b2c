//! Body normalization
//!
//! Issue and pull request bodies written through some clients contain raw
//! HTML lists. Those are converted to Markdown; everything else is left
//! untouched so clean Markdown is never re-processed.

use std::borrow::Cow;

use tracing::{debug, warn};

/// Heuristic marker for HTML list markup
const LIST_ITEM_TAG: &str = "<li>";

/// Whether the body looks like it carries HTML list markup
pub fn has_html_list(body: &str) -> bool {
    body.to_ascii_lowercase().contains(LIST_ITEM_TAG)
}

/// Convert HTML list markup to Markdown, falling back to the input verbatim
pub fn normalize(body: &str) -> Cow<'_, str> {
    normalize_with(body, htmd::convert)
}

fn normalize_with<F, E>(body: &str, convert: F) -> Cow<'_, str>
where
    F: FnOnce(&str) -> Result<String, E>,
    E: std::fmt::Display,
{
    if !has_html_list(body) {
        return Cow::Borrowed(body);
    }

    match convert(body) {
        Ok(markdown) => {
            debug!(
                before = body.len(),
                after = markdown.len(),
                "Converted HTML body to Markdown"
            );
            Cow::Owned(markdown)
        }
        Err(e) => {
            warn!(error = %e, "HTML to Markdown conversion failed, using raw body");
            Cow::Borrowed(body)
        }
    }
}
