//! Core type definitions for the Bullhorn REST JSON codec.
//!
//! This crate defines the small, entity-agnostic types shared by the model
//! and codec crates:
//! - Entity identifiers as the REST API hands them out (integers)
//! - Millisecond-precision UTC timestamps that travel as epoch milliseconds
//!
//! Entity shapes themselves live in `bullhorn-model`.

mod ids;
mod timestamp;

pub use ids::EntityId;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("timestamp out of range: {0} ms")]
    OutOfRange(i64),

    #[error("invalid entity id: {0}")]
    InvalidEntityId(#[from] std::num::ParseIntError),
}
