//! Tests for Kafka sink configuration

use super::*;

fn base() -> KafkaSinkConfig {
    KafkaSinkConfig::new(vec!["broker-1:9092".to_string()], "logs-{app}")
}

#[test]
fn test_defaults() {
    let config = KafkaSinkConfig::default();
    assert_eq!(config.max_attempts, 10);
    assert_eq!(config.batch_size, 100);
    assert_eq!(config.batch_bytes, 1024 * 1024);
    assert_eq!(config.batch_timeout, Duration::from_secs(1));
    assert_eq!(config.balance, Balance::RoundRobin);
    assert_eq!(config.required_acks, RequiredAcks::Leader);
    assert_eq!(config.compression, Compression::None);
}

#[test]
fn test_validation() {
    assert!(base().validate().is_ok());

    let no_brokers = KafkaSinkConfig::new(Vec::new(), "logs");
    assert!(no_brokers.validate().is_err());

    let no_topic = KafkaSinkConfig::new(vec!["b:9092".to_string()], "");
    assert!(no_topic.validate().is_err());

    let zero_batch = base().with_batch_size(0);
    assert!(zero_batch.validate().is_err());
}

#[test]
fn test_builders() {
    let config = base()
        .with_max_attempts(3)
        .with_balance(Balance::ConsistentHash)
        .with_required_acks(RequiredAcks::All)
        .with_compression(Compression::Zstd)
        .with_write_timeout(Duration::from_secs(5));

    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.balance, Balance::ConsistentHash);
    assert_eq!(config.required_acks, RequiredAcks::All);
    assert_eq!(config.compression, Compression::Zstd);
    assert_eq!(config.write_timeout, Duration::from_secs(5));
}

#[test]
fn test_enum_parsing() {
    assert_eq!(Balance::parse("roundRobin").unwrap(), Balance::RoundRobin);
    assert_eq!(Balance::parse("leastBytes").unwrap(), Balance::LeastBytes);
    assert_eq!(Balance::parse("hash").unwrap(), Balance::ConsistentHash);
    assert!(Balance::parse("bogus").is_err());

    assert_eq!(RequiredAcks::parse("all").unwrap(), RequiredAcks::All);
    assert_eq!(RequiredAcks::parse("none").unwrap().value(), "0");
    assert!(RequiredAcks::parse("quorum").is_err());

    assert_eq!(Compression::parse("zstd").unwrap(), Compression::Zstd);
    assert_eq!(Compression::parse("none").unwrap().codec(), "none");
    assert!(Compression::parse("brotli").is_err());
}

#[test]
fn test_partitioner_mapping() {
    assert_eq!(Balance::RoundRobin.partitioner(), "random");
    assert_eq!(Balance::LeastBytes.partitioner(), "consistent_random");
    assert_eq!(Balance::ConsistentHash.partitioner(), "murmur2_random");
}

#[test]
fn test_from_raw() {
    let mut raw = ComponentConfig::new();
    raw.insert(
        "brokers".to_string(),
        toml::Value::Array(vec![
            toml::Value::String("b1:9092".to_string()),
            toml::Value::String("b2:9092".to_string()),
        ]),
    );
    raw.insert(
        "topic".to_string(),
        toml::Value::String("logs-{app}".to_string()),
    );
    raw.insert("maxAttempts".to_string(), toml::Value::Integer(5));
    raw.insert(
        "requiredAcks".to_string(),
        toml::Value::String("all".to_string()),
    );
    raw.insert("batchTimeoutMs".to_string(), toml::Value::Integer(250));

    let config = KafkaSinkConfig::from_raw(&raw).unwrap();
    assert_eq!(config.brokers.len(), 2);
    assert_eq!(config.topic, "logs-{app}");
    assert_eq!(config.max_attempts, 5);
    assert_eq!(config.required_acks, RequiredAcks::All);
    assert_eq!(config.batch_timeout, Duration::from_millis(250));
}

#[test]
fn test_from_raw_rejects_unknown_enum_value() {
    let mut raw = ComponentConfig::new();
    raw.insert(
        "brokers".to_string(),
        toml::Value::Array(vec![toml::Value::String("b:9092".to_string())]),
    );
    raw.insert("topic".to_string(), toml::Value::String("logs".to_string()));
    raw.insert(
        "balance".to_string(),
        toml::Value::String("bogus".to_string()),
    );

    let err = KafkaSinkConfig::from_raw(&raw).unwrap_err();
    assert!(err.to_string().contains("balance"));
}

#[test]
fn test_from_raw_missing_brokers() {
    let mut raw = ComponentConfig::new();
    raw.insert("topic".to_string(), toml::Value::String("logs".to_string()));
    assert!(KafkaSinkConfig::from_raw(&raw).is_err());
}
