//! Shared types for the Bistro staff & menu service
//!
//! Entity rows, request payloads and the JSON envelopes used on the wire.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
