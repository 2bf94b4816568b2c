//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (HTTP fetching, message delivery).
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod delivery;
pub mod fetcher;

// Re-exports
pub use delivery::*;
pub use fetcher::*;
