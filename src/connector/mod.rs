//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (OpenAI-compatible HTTP provider, plus an offline mock)
//! - CLI wiring (container, router, controllers)
//! - HTTP API (axum)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::*;
pub use http::*;
