//! Event - One unit of log data
//!
//! An event pairs an immutable raw body (the unparsed log line) with a
//! mutable header map that interceptors enrich in place as the event moves
//! down the chain.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Value;

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;

/// One unit of log data
///
/// # Ownership
///
/// An event is owned exclusively by the batch that carries it; no event is
/// shared across batches. The body is fixed at construction time, only the
/// header may be mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Raw, unparsed log line
    body: Bytes,

    /// Derived data attached by interceptors
    header: HashMap<String, Value>,
}

impl Event {
    /// Create an event from a raw body with an empty header
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            header: HashMap::new(),
        }
    }

    /// Create an event with a pre-populated header
    pub fn with_header(body: impl Into<Bytes>, header: HashMap<String, Value>) -> Self {
        Self {
            body: body.into(),
            header,
        }
    }

    /// Get the raw body
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as a reference-counted buffer
    #[inline]
    pub fn body_bytes(&self) -> &Bytes {
        &self.body
    }

    /// Get the header map
    #[inline]
    pub fn header(&self) -> &HashMap<String, Value> {
        &self.header
    }

    /// Get the header map for in-place mutation
    #[inline]
    pub fn header_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.header
    }
}
