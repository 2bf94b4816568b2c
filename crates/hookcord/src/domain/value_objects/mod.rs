//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod action;
mod color;
mod event_kind;
mod profile;

pub use action::*;
pub use color::*;
pub use event_kind::*;
pub use profile::*;
