//! HTTP transport layer
//!
//! Provides the informational endpoints and the JSON fallbacks for unknown routes.

pub mod handlers;
