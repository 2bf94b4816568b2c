//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - GitHub payloads: decoded webhook deliveries
//! - Notification: transport-neutral embed
//! - Commit: pull request commit record
//! - Outcome: resolution of a delivery

mod commit;
mod github;
mod notification;
mod outcome;

pub use commit::*;
pub use github::*;
pub use notification::*;
pub use outcome::*;
