//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod commits;

// Re-exports
pub use commits::HttpCommitFetcher;
