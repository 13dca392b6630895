//! Error types for the codec.

use serde_json::error::Category;
use std::fmt;
use thiserror::Error;

/// What went wrong while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingErrorKind {
    /// Text is not well-formed JSON (including truncated input).
    Parse,
    /// Well-formed JSON that does not fit the target type.
    Structure,
    /// The underlying reader failed.
    Io,
}

impl From<Category> for MappingErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax | Category::Eof => Self::Parse,
            Category::Data => Self::Structure,
            Category::Io => Self::Io,
        }
    }
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Parse => "parse",
            Self::Structure => "structure",
            Self::Io => "io",
        };
        f.write_str(s)
    }
}

/// Any failure to map JSON text onto a target type.
#[derive(Debug, Error)]
#[error("error mapping json to {target_type} ({kind}): {source}. json = {json}")]
pub struct MappingError {
    kind: MappingErrorKind,
    target_type: &'static str,
    json: String,
    source: serde_json::Error,
}

impl MappingError {
    pub(crate) fn new<T>(json: &str, source: serde_json::Error) -> Self {
        Self {
            kind: source.classify().into(),
            target_type: std::any::type_name::<T>(),
            json: json.to_owned(),
            source,
        }
    }

    pub fn kind(&self) -> MappingErrorKind {
        self.kind
    }

    /// Fully qualified name of the type decoding was attempted into.
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    /// The text that failed to map.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// One-based line of the failure, 0 for stream errors.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// Result type for decode operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Failure to turn an entity into JSON text.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("error serializing entity of type {entity_type} to json: {source}")]
    Serialization {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl EncodeError {
    pub(crate) fn serialization<T>(source: serde_json::Error) -> Self {
        Self::Serialization {
            entity_type: std::any::type_name::<T>(),
            source,
        }
    }

    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::Serialization { entity_type, .. } => entity_type,
        }
    }
}
