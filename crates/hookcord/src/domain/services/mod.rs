//! Domain Services
//!
//! Stateless transformation logic: classify an event, build its
//! notification, summarize commits, normalize and truncate text.

pub mod builder;
pub mod classifier;
pub mod markdown;
pub mod summarizer;
pub mod truncate;

pub use builder::build;
pub use classifier::{classify, resolve_action, Classification, Emit};
pub use summarizer::{render_commits, CommitSummarizer};
