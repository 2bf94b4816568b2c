//! Application Layer
//!
//! Use case orchestration over domain services and ports.

mod relay_service;

#[cfg(test)]
pub(crate) mod testing;

pub use relay_service::{RelayError, RelayService};
