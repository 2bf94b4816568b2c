//! HTTP routes
//!
//! Webhook intake lives here; `/health` is mounted directly in `main`.

pub mod webhook;
