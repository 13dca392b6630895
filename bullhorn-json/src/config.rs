use serde::{Deserialize, Serialize};

use crate::NullBypassFields;

/// Settings fixed for the lifetime of a [`RestJsonCodec`](crate::RestJsonCodec).
///
/// Date/time values are always written as epoch milliseconds; that rule
/// lives in [`Timestamp`](bullhorn_model::Timestamp) and is not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Indent encoded output.
    pub pretty: bool,
    /// Null fields that plain `encode` still writes.
    pub default_null_bypass: NullBypassFields,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            default_null_bypass: NullBypassFields::none(),
        }
    }
}

impl CodecConfig {
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_default_null_bypass(mut self, fields: impl Into<NullBypassFields>) -> Self {
        self.default_null_bypass = fields.into();
        self
    }
}
