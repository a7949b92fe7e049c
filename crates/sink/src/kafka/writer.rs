//! BulkWriter - Narrow write contract over the broker transport
//!
//! The sink never speaks the broker wire protocol itself: it hands an
//! ordered list of (payload, destination) pairs to a `BulkWriter` and treats
//! the call as atomic for result-reporting purposes. The production
//! implementation wraps an `rdkafka` producer; tests substitute a mock.

use async_trait::async_trait;
use bytes::Bytes;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};

use crate::config::KafkaSinkConfig;
use crate::error::SinkError;

/// One encoded event bound to its resolved destination
#[derive(Debug, Clone)]
pub struct ProducerMessage {
    /// Destination topic resolved from the route pattern
    pub destination: String,

    /// Encoded payload
    pub payload: Bytes,
}

/// Bulk-write contract the sink dispatches through
///
/// Implementations are expected to provide at-least-once semantics at the
/// individual-message level; this core does not inspect partial success and
/// reports the whole call as delivered or failed.
#[async_trait]
pub trait BulkWriter: Send + Sync {
    /// Write an ordered list of messages as one bulk call
    ///
    /// # Errors
    ///
    /// The first transport error fails the call; the batch must then be
    /// considered undelivered as a whole.
    async fn write_batch(&self, messages: Vec<ProducerMessage>) -> Result<(), SinkError>;
}

/// `BulkWriter` backed by an `rdkafka` producer
///
/// All enqueued deliveries are awaited before the call returns, so a
/// successful `write_batch` means every message was acknowledged at the
/// configured acks level.
pub struct KafkaWriter {
    producer: FutureProducer,
}

impl KafkaWriter {
    /// Build a writer from fully-resolved sink configuration
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Transport` if the underlying client rejects the
    /// rendered properties.
    pub fn from_config(config: &KafkaSinkConfig) -> Result<Self, SinkError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", config.brokers.join(","))
            .set("message.send.max.retries", config.max_attempts.to_string())
            .set("partitioner", config.balance.partitioner())
            .set("batch.num.messages", config.batch_size.to_string())
            .set("batch.size", config.batch_bytes.to_string())
            .set("linger.ms", config.batch_timeout.as_millis().to_string())
            .set("socket.timeout.ms", config.read_timeout.as_millis().to_string())
            .set(
                "message.timeout.ms",
                config.write_timeout.as_millis().to_string(),
            )
            .set("request.required.acks", config.required_acks.value())
            .set("compression.codec", config.compression.codec())
            .create()?;

        Ok(Self { producer })
    }
}

#[async_trait]
impl BulkWriter for KafkaWriter {
    async fn write_batch(&self, messages: Vec<ProducerMessage>) -> Result<(), SinkError> {
        // Enqueue everything first so the transport can batch the set, then
        // await every delivery acknowledgment.
        let mut deliveries = Vec::with_capacity(messages.len());
        for message in &messages {
            let record =
                FutureRecord::<(), _>::to(&message.destination).payload(message.payload.as_ref());
            let delivery = self
                .producer
                .send_result(record)
                .map_err(|(err, _record)| SinkError::Transport(err))?;
            deliveries.push(delivery);
        }

        for delivery in deliveries {
            match delivery.await {
                Ok(Ok(_)) => {}
                Ok(Err((err, _message))) => return Err(SinkError::Transport(err)),
                Err(_cancelled) => return Err(SinkError::Cancelled),
            }
        }

        Ok(())
    }
}
