//! hookcord Domain Library
//!
//! Core types and transformation logic for relaying GitHub webhook events
//! to chat platforms as color-coded embeds.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: GitHub payloads, Notification, Commit, Outcome
//!   - `value_objects/`: Immutable value types (Action, Color, RenderProfile)
//!   - `services/`: Classifier, builder, commit summarizer, truncation
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `fetcher`: commit listing retrieval
//!   - `delivery`: notification transports
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookcord::domain::services::{build, classify, Classification};
//! use hookcord::{EventKind, RenderProfile, WebhookEvent};
//!
//! let event = WebhookEvent::parse(&EventKind::Issues, body)?;
//! if let Classification::Emit(emit) = classify(RenderProfile::Classic, &event) {
//!     let notification = build(RenderProfile::Classic, &emit, None);
//! }
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Action, Color, Commit, DomainError, EffectiveAction, EmbedAuthor, EmbedField, EmbedFooter,
    EventKind, GitHubUser, Notification, Outcome, Palette, RenderProfile, SkipReason, Subject,
    SubjectEvent, SubjectKind, SubjectState, WebhookEvent,
};
pub use ports::{CommitFetchConfig, CommitFetcher, Credentials, NotificationSink, SinkFactory};
