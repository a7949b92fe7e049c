//! Codec - Event encoding plus routing-field extraction
//!
//! A codec turns one event into a transportable payload and, as a side
//! product of encoding, a flat field mapping the route pattern is resolved
//! against. The encoded result is never mutated after creation.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Value;

use crate::error::SinkError;
use skiff_protocol::{Event, SYSTEM_LOG_BODY_KEY};

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;

/// Output of encoding one event
#[derive(Debug, Clone)]
pub struct Encoded {
    raw: Bytes,
    fields: HashMap<String, String>,
}

impl Encoded {
    /// Create an encoded result
    pub fn new(raw: impl Into<Bytes>, fields: HashMap<String, String>) -> Self {
        Self {
            raw: raw.into(),
            fields,
        }
    }

    /// The transportable payload
    #[inline]
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// Field mapping extracted during encoding, for routing decisions
    #[inline]
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Split into payload and fields
    pub fn into_parts(self) -> (Bytes, HashMap<String, String>) {
        (self.raw, self.fields)
    }
}

/// Encodes a structured event into a raw payload plus routing fields
pub trait Codec: Send + Sync {
    /// Encode one event
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Encode` on serialization failure. Callers treat
    /// this as batch-fatal.
    fn encode(&self, event: &Event) -> Result<Encoded, SinkError>;
}

/// JSON codec: `{"body": "<line>", ...header}`
///
/// The routing field mapping collects top-level string-valued header entries
/// plus the flattened contents of the reserved `systemLogBody` object, so
/// destination patterns can reference both pre-set header fields and
/// extracted fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode(&self, event: &Event) -> Result<Encoded, SinkError> {
        let mut object = serde_json::Map::with_capacity(event.header().len() + 1);
        object.insert(
            "body".to_string(),
            Value::String(String::from_utf8_lossy(event.body()).into_owned()),
        );

        let mut fields = HashMap::new();
        for (key, value) in event.header() {
            match value {
                Value::String(text) => {
                    fields.insert(key.clone(), text.clone());
                }
                Value::Object(mapping) if key == SYSTEM_LOG_BODY_KEY => {
                    for (name, entry) in mapping {
                        if let Value::String(text) = entry {
                            fields.insert(name.clone(), text.clone());
                        }
                    }
                }
                _ => {}
            }
            object.insert(key.clone(), value.clone());
        }

        let raw = serde_json::to_vec(&Value::Object(object))
            .map_err(|err| SinkError::encode(err.to_string()))?;

        Ok(Encoded::new(raw, fields))
    }
}
