//! JSON codec for Bullhorn REST entities.
//!
//! [`RestJsonCodec`] converts between JSON text and strongly-typed values:
//! - **decode**: any `DeserializeOwned` type; every failure (malformed text,
//!   shape mismatch, stream error) becomes one [`MappingError`] carrying the
//!   original text and the target type
//! - **encode**: any [`BullhornEntity`]; null-valued fields are dropped unless
//!   named in a [`NullBypassFields`] set, timestamps are epoch milliseconds,
//!   output is pretty-printed by default
//!
//! `encode` never fails from the caller's point of view: serialization faults
//! are logged through `tracing` and yield an empty string. Callers that need
//! the error use the `try_encode*` variants.
//!
//! [`BullhornEntity`]: bullhorn_model::BullhornEntity

mod codec;
mod config;
mod error;
mod filter;

pub use codec::RestJsonCodec;
pub use config::CodecConfig;
pub use error::{EncodeError, MappingError, MappingErrorKind, MappingResult};
pub use filter::{apply_filter, FieldFilter, NullBypassFields, NullValueFilter};
