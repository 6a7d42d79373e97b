//! # Domain Layer
//!
//! Provider configuration, chat wire models, itinerary requests and the error type.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
