//! Sink error types
//!
//! Every variant except `Config` is batch-fatal at dispatch time and travels
//! upward wrapped in `SinkResult::Fail`; retry eligibility is decided by the
//! external controller, not here.

use thiserror::Error;

use skiff_pattern::PatternError;

/// Errors that can occur during sink configuration or dispatch
#[derive(Debug, Error)]
pub enum SinkError {
    /// An event could not be serialized
    #[error("failed to encode event: {0}")]
    Encode(String),

    /// A destination could not be computed for an event
    #[error("failed to resolve destination: {0}")]
    Route(#[from] PatternError),

    /// The bulk write call itself failed; carries the transport error
    /// unmodified
    #[error("transport write failed: {0}")]
    Transport(#[from] rdkafka::error::KafkaError),

    /// The transport shut down before acknowledging a delivery
    #[error("delivery cancelled: transport shut down before acknowledgment")]
    Cancelled,

    /// Invalid sink configuration - fatal at startup
    #[error("configuration error: {0}")]
    Config(String),
}

impl SinkError {
    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
