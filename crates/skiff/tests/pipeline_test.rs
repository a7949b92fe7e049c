//! End-to-end pipeline tests
//!
//! Builds components through the registry exactly as a pipeline driver
//! would, then runs batches through normalize -> kafka with a mocked
//! transport.

use serde_json::json;
use skiff::{
    builtin_registry, Batch, BulkWriter, Category, Chain, Component, ComponentConfig,
    ComponentContext, Event, KafkaSink, KafkaSinkConfig, ProducerMessage, SinkError,
    SYSTEM_LOG_BODY_KEY,
};
use std::sync::{Arc, Mutex};

struct RecordingWriter {
    calls: Arc<Mutex<Vec<Vec<ProducerMessage>>>>,
}

#[async_trait::async_trait]
impl BulkWriter for RecordingWriter {
    async fn write_batch(&self, messages: Vec<ProducerMessage>) -> Result<(), SinkError> {
        self.calls.lock().unwrap().push(messages);
        Ok(())
    }
}

fn normalize_config(pattern: &str) -> ComponentConfig {
    let mut raw = ComponentConfig::new();
    raw.insert(
        "pattern".to_string(),
        toml::Value::String(pattern.to_string()),
    );
    raw
}

#[tokio::test]
async fn test_registry_to_chain_to_dispatch() {
    let registry = builtin_registry();
    assert!(registry.contains(Category::Interceptor, "normalize"));
    assert!(registry.contains(Category::Interceptor, "noop"));
    assert!(registry.contains(Category::Sink, "kafka"));

    // Interceptor from the registry, as a pipeline driver would build it
    let mut interceptor = registry
        .create(
            Category::Interceptor,
            "normalize",
            &normalize_config(r"(?<level>[A-Z]+)\s(?<msg>.+)"),
        )
        .unwrap()
        .into_interceptor()
        .unwrap();
    interceptor
        .init(&ComponentContext::new("logs", "normalize-0"))
        .unwrap();

    // Sink with a mocked transport
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut sink = KafkaSink::new(KafkaSinkConfig::new(
        vec!["broker-1:9092".to_string()],
        "logs-{level}",
    ))
    .with_writer(Box::new(RecordingWriter {
        calls: Arc::clone(&calls),
    }));
    sink.init(&ComponentContext::new("logs", "kafka-0")).unwrap();
    sink.start().unwrap();

    let mut chain = Chain::new(vec![interceptor], Box::new(sink), "logs");

    let batch = Batch::new(vec![
        Event::new(&b"ERROR disk full"[..]),
        Event::new(&b"WARN disk almost full"[..]),
    ]);
    let result = chain.process(batch).await;
    assert!(result.map(|r| r.is_success()).unwrap_or(false));

    // Normalization routed each event by its extracted level
    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let destinations: Vec<&str> = calls[0].iter().map(|m| m.destination.as_str()).collect();
        assert_eq!(destinations, vec!["logs-ERROR", "logs-WARN"]);

        let payload: serde_json::Value = serde_json::from_slice(&calls[0][0].payload).unwrap();
        assert_eq!(payload["body"], json!("ERROR disk full"));
        assert_eq!(payload[SYSTEM_LOG_BODY_KEY]["msg"], json!("disk full"));
    }

    // Empty batch short-circuits to absence
    assert!(chain.process(Batch::empty()).await.is_none());

    chain.stop();
}

#[tokio::test]
async fn test_unmatched_events_fail_routing_as_batch() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut sink = KafkaSink::new(KafkaSinkConfig::new(
        vec!["broker-1:9092".to_string()],
        "logs-{level}",
    ))
    .with_writer(Box::new(RecordingWriter {
        calls: Arc::clone(&calls),
    }));
    sink.init(&ComponentContext::new("logs", "kafka-0")).unwrap();
    sink.start().unwrap();

    let registry = builtin_registry();
    let mut interceptor = registry
        .create(
            Category::Interceptor,
            "normalize",
            &normalize_config(r"(?<level>[A-Z]+)\s(?<msg>.+)"),
        )
        .unwrap()
        .into_interceptor()
        .unwrap();
    interceptor
        .init(&ComponentContext::new("logs", "normalize-0"))
        .unwrap();

    let chain = Chain::new(vec![interceptor], Box::new(sink), "logs");

    // The second body never matches, so no `level` field is extracted and
    // the topic pattern cannot resolve: the whole batch fails, no writes.
    let batch = Batch::new(vec![
        Event::new(&b"ERROR disk full"[..]),
        Event::new(&b"plain line"[..]),
    ]);
    let result = chain.process(batch).await.expect("non-empty batch");

    assert!(result.is_fail());
    assert!(calls.lock().unwrap().is_empty());

    // The stage at fault opts out of retry; the controller consults this.
    assert_eq!(
        chain.ignore_retry_flags(),
        vec![("normalize", true)]
    );
}
