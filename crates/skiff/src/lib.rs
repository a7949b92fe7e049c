//! Skiff - Processing core of a log-shipping agent
//!
//! Events collected from sources flow through an ordered, pluggable chain of
//! interceptors and are delivered in batches to an external sink. This crate
//! ties the workspace together and registers the built-in components.
//!
//! # Overview
//!
//! ```text
//! [Batch] -> [normalize] -> ... -> [kafka sink] -> Option<SinkResult>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use skiff::{builtin_registry, Category, Chain, ComponentContext};
//!
//! // Registration phase, once at process start:
//! builtin_registry().freeze();
//!
//! // Pipeline construction, from configuration:
//! let registry = skiff::ComponentRegistry::global();
//! let mut interceptor = registry
//!     .create(Category::Interceptor, "normalize", &interceptor_config)?
//!     .into_interceptor()?;
//! let mut sink = registry
//!     .create(Category::Sink, "kafka", &sink_config)?
//!     .into_sink()?;
//!
//! interceptor.init(&ComponentContext::new("logs", "normalize-0"))?;
//! sink.init(&ComponentContext::new("logs", "kafka-0"))?;
//! sink.start()?;
//!
//! let chain = Chain::new(vec![interceptor], sink, "logs");
//! let result = chain.process(batch).await;
//! ```

pub use skiff_interceptor::{
    NoopFactory, NoopInterceptor, NormalizeConfig, NormalizeFactory, NormalizeInterceptor,
};
pub use skiff_pattern::{Matcher, PatternError, RoutePattern, Segment};
pub use skiff_pipeline::{
    Category, Chain, Component, ComponentConfig, ComponentContext, ComponentFactory,
    ComponentRegistry, Interceptor, Invocation, Invoker, PipelineComponent, PipelineError,
    PipelineResult, Sink,
};
pub use skiff_protocol::{Batch, BoxError, Event, SinkResult, SYSTEM_LOG_BODY_KEY};
pub use skiff_sink::{
    Balance, BulkWriter, Codec, Compression, Encoded, JsonCodec, KafkaFactory, KafkaSink,
    KafkaSinkConfig, KafkaWriter, ProducerMessage, RequiredAcks, SinkError,
};

/// Create a registry with all built-in components registered
///
/// Includes:
/// - `interceptor/normalize` - field extraction into `systemLogBody`
/// - `interceptor/noop` - pass-through
/// - `sink/kafka` - batched dispatch with topic routing
///
/// Call `freeze()` on the result at the end of the registration phase,
/// after registering any extension components.
pub fn builtin_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    register_builtins(&mut registry);
    registry
}

/// Register the built-in components into an existing registry
pub fn register_builtins(registry: &mut ComponentRegistry) {
    registry.register(Category::Interceptor, "normalize", NormalizeFactory);
    registry.register(Category::Interceptor, "noop", NoopFactory);
    registry.register(Category::Sink, "kafka", KafkaFactory);
}
