//! Kafka Sink - Terminal chain stage dispatching batches to Kafka
//!
//! Encodes each event, resolves its destination topic from the compiled
//! route pattern, and performs exactly one bulk write per batch.
//!
//! # Dispatch algorithm
//!
//! 1. Empty batch: return absence (`None`) - nothing to do, not a success
//! 2. Encode every event in batch order; the first failure aborts the whole
//!    batch before any write (no malformed subset is ever delivered)
//! 3. Resolve every destination; the first unresolved field likewise aborts
//! 4. One `write_batch` call with all accumulated (payload, destination)
//!    pairs
//! 5. Transport failure wraps the underlying error unmodified so the
//!    external retry controller can classify it

mod writer;

pub use writer::{BulkWriter, KafkaWriter, ProducerMessage};

use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::codec::{Codec, JsonCodec};
use crate::config::KafkaSinkConfig;
use crate::error::SinkError;
use skiff_pattern::RoutePattern;
use skiff_pipeline::{
    Category, Component, ComponentConfig, ComponentContext, ComponentFactory, PipelineComponent,
    PipelineError, PipelineResult, Sink,
};
use skiff_protocol::{Batch, SinkResult};

#[cfg(test)]
#[path = "kafka_test.rs"]
mod tests;

/// Registered type name of this sink
pub const TYPE: &str = "kafka";

/// Sink delivering batches to Kafka with per-event topic routing
pub struct KafkaSink {
    config: KafkaSinkConfig,
    name: String,
    codec: Box<dyn Codec>,
    topic: Option<RoutePattern>,
    writer: Option<Box<dyn BulkWriter>>,
    done: CancellationToken,
}

impl KafkaSink {
    /// Create a sink from a validated config, using the JSON codec
    pub fn new(config: KafkaSinkConfig) -> Self {
        Self {
            config,
            name: String::new(),
            codec: Box::new(JsonCodec::new()),
            topic: None,
            writer: None,
            done: CancellationToken::new(),
        }
    }

    /// Replace the codec
    #[must_use]
    pub fn with_codec(mut self, codec: Box<dyn Codec>) -> Self {
        self.codec = codec;
        self
    }

    /// Inject a transport writer, bypassing producer construction at `start`
    ///
    /// Used by tests and by callers embedding their own transport.
    #[must_use]
    pub fn with_writer(mut self, writer: Box<dyn BulkWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Instance name bound at init
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for KafkaSink {
    fn category(&self) -> Category {
        Category::Sink
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }

    fn init(&mut self, context: &ComponentContext) -> PipelineResult<()> {
        self.name = context.component_name().to_string();
        self.topic = Some(RoutePattern::compile(&self.config.topic)?);
        Ok(())
    }

    fn start(&mut self) -> PipelineResult<()> {
        if self.writer.is_none() {
            let writer = KafkaWriter::from_config(&self.config)
                .map_err(|err| PipelineError::startup(err.to_string()))?;
            self.writer = Some(Box::new(writer));
        }
        info!(
            name = %self.name,
            topic = %self.config.topic,
            brokers = ?self.config.brokers,
            "kafka sink started"
        );
        Ok(())
    }

    fn stop(&mut self) {
        self.done.cancel();
        // Dropping the writer tears down the producer; tolerates start never
        // having been reached.
        self.writer = None;
    }
}

impl Sink for KafkaSink {
    fn consume<'a>(
        &'a self,
        batch: Batch,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>> {
        Box::pin(async move {
            if batch.is_empty() {
                return None;
            }

            // Consuming an unstarted sink is a programming error in the
            // pipeline driver, not a recoverable dispatch failure.
            let writer = self
                .writer
                .as_ref()
                .expect("kafka sink consumed before start");
            let topic = self
                .topic
                .as_ref()
                .expect("kafka sink consumed before init");

            let mut messages = Vec::with_capacity(batch.len());
            for event in batch.events() {
                let encoded = match self.codec.encode(event) {
                    Ok(encoded) => encoded,
                    Err(err) => {
                        warn!(sink = %self.name, %err, "encode failed, dropping batch");
                        return Some(SinkResult::fail(err));
                    }
                };

                let (payload, fields) = encoded.into_parts();
                let destination = match topic.resolve(&fields) {
                    Ok(destination) => destination,
                    Err(err) => {
                        error!(sink = %self.name, %err, "topic resolution failed, dropping batch");
                        return Some(SinkResult::fail(SinkError::Route(err)));
                    }
                };

                messages.push(ProducerMessage {
                    destination,
                    payload,
                });
            }

            match writer.write_batch(messages).await {
                Ok(()) => Some(SinkResult::Success),
                Err(err) => {
                    error!(
                        sink = %self.name,
                        events = batch.len(),
                        %err,
                        "bulk write failed"
                    );
                    Some(SinkResult::fail(err))
                }
            }
        })
    }
}

/// Factory for `kafka` sinks
pub struct KafkaFactory;

impl ComponentFactory for KafkaFactory {
    fn create(&self, config: &ComponentConfig) -> PipelineResult<PipelineComponent> {
        let config = KafkaSinkConfig::from_raw(config)?;
        Ok(PipelineComponent::Sink(Box::new(KafkaSink::new(config))))
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }
}
