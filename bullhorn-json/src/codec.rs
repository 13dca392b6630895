//! The REST JSON codec.

use bullhorn_model::BullhornEntity;
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::io::Read;
use tracing::{debug, error};

use crate::config::CodecConfig;
use crate::error::{EncodeError, MappingError, MappingResult};
use crate::filter::{apply_filter, FieldFilter, NullBypassFields, NullValueFilter};

/// Converts between JSON text and Bullhorn entities.
///
/// Holds nothing but its [`CodecConfig`], so a single instance can be shared
/// freely between threads.
///
/// # Example
/// ```ignore
/// let codec = RestJsonCodec::new();
/// let candidate: Candidate = codec.decode(r#"{"id": 1, "firstName": "Ada"}"#)?;
///
/// // `email` is null and dropped; `phone` is null but written.
/// let json = codec.encode_with_null_bypass(&candidate, &NullBypassFields::from(["phone"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestJsonCodec {
    config: CodecConfig,
}

impl RestJsonCodec {
    /// Codec with the default configuration: pretty output, no null bypass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    // ── decode ──────────────────────────────────────────────────

    /// Parses `json` into a `T`.
    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> MappingResult<T> {
        serde_json::from_str(json).map_err(|e| mapping_failure::<T>(json, e))
    }

    /// Reads the whole stream and parses it into a `T`.
    ///
    /// On a read failure the error carries whatever was read so far.
    pub fn decode_reader<T: DeserializeOwned, R: Read>(&self, mut reader: R) -> MappingResult<T> {
        let mut buf = Vec::new();
        if let Err(e) = reader.read_to_end(&mut buf) {
            let json = String::from_utf8_lossy(&buf);
            return Err(mapping_failure::<T>(&json, serde_json::Error::io(e)));
        }
        serde_json::from_slice(&buf)
            .map_err(|e| mapping_failure::<T>(&String::from_utf8_lossy(&buf), e))
    }

    // ── encode ──────────────────────────────────────────────────

    /// Serializes `entity`, dropping null fields except those in the
    /// configured default bypass set.
    ///
    /// Returns an empty string if serialization fails; the failure is logged.
    pub fn encode<T: BullhornEntity>(&self, entity: &T) -> String {
        swallow::<T>(self.try_encode(entity))
    }

    /// Serializes `entity`, writing the fields named in `null_bypass` even
    /// when they are null. The set replaces the configured default.
    ///
    /// Returns an empty string if serialization fails; the failure is logged.
    pub fn encode_with_null_bypass<T: BullhornEntity>(
        &self,
        entity: &T,
        null_bypass: &NullBypassFields,
    ) -> String {
        swallow::<T>(self.try_encode_with_null_bypass(entity, null_bypass))
    }

    pub fn try_encode<T: BullhornEntity>(&self, entity: &T) -> Result<String, EncodeError> {
        self.try_encode_with_null_bypass(entity, &self.config.default_null_bypass)
    }

    pub fn try_encode_with_null_bypass<T: BullhornEntity>(
        &self,
        entity: &T,
        null_bypass: &NullBypassFields,
    ) -> Result<String, EncodeError> {
        self.try_encode_with_filter(entity, &NullValueFilter::new(null_bypass))
    }

    /// Serializes `entity` with a caller-supplied field filter.
    pub fn try_encode_with_filter<T, F>(&self, entity: &T, filter: &F) -> Result<String, EncodeError>
    where
        T: BullhornEntity,
        F: FieldFilter + ?Sized,
    {
        let mut value = serde_json::to_value(entity).map_err(EncodeError::serialization::<T>)?;
        apply_filter(&mut value, filter);
        let written = if self.config.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        written.map_err(EncodeError::serialization::<T>)
    }
}

fn mapping_failure<T>(json: &str, source: serde_json::Error) -> MappingError {
    let err = MappingError::new::<T>(json, source);
    let target_type = type_name::<T>();
    debug!(target_type, kind = %err.kind(), "json mapping failed: {}", err);
    err
}

fn swallow<T: BullhornEntity>(result: Result<String, EncodeError>) -> String {
    result.unwrap_or_else(|e| {
        let entity_type = e.entity_type();
        error!(
            entity = T::ENTITY_NAME,
            entity_type,
            error = %e,
            "Error serializing entity to json"
        );
        String::new()
    })
}
