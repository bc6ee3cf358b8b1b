//! Storage layer: trait abstractions plus the JSON-file backend.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{Connection, RecordStorage};
