//! Skiff Sink - Batched dispatch to an external broker
//!
//! The terminal stage of the interceptor chain: encodes each event, computes
//! its destination from a compiled route pattern, and performs exactly one
//! bulk write per batch against the transport.
//!
//! # Architecture
//!
//! ```text
//! [Batch] -> [Codec.encode per event] -> [RoutePattern.resolve per event]
//!         -> [BulkWriter.write_batch once] -> Option<SinkResult>
//! ```
//!
//! # Failure classification
//!
//! - Encode failure: batch-fatal before any write (no malformed subset is
//!   ever delivered)
//! - Route resolution failure: batch-fatal before any write
//! - Transport failure: batch-fatal, the underlying error propagates
//!   unmodified for the external retry controller
//! - Empty batch: absence (`None`), not `Success`
//!
//! The broker wire protocol is an opaque dependency: the sink talks to it
//! only through the narrow `BulkWriter` contract, implemented over
//! `rdkafka` in production and mocked in tests.

mod codec;
mod config;
mod error;
pub mod kafka;

pub use codec::{Codec, Encoded, JsonCodec};
pub use config::{Balance, Compression, KafkaSinkConfig, RequiredAcks};
pub use error::SinkError;
pub use kafka::{BulkWriter, KafkaFactory, KafkaSink, KafkaWriter, ProducerMessage};

/// Result type for sink operations
pub type SinkOpResult<T> = Result<T, SinkError>;
