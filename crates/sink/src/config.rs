//! Kafka sink configuration
//!
//! Fully-resolved dispatch settings: destination endpoints, batching and
//! timeout thresholds, acknowledgment level, compression mode, and the
//! load-balancing strategy for multi-partition fan-out. Validated before
//! the sink is constructed; rendered to transport properties at `start`.

use std::time::Duration;

use skiff_pipeline::{ComponentConfig, PipelineError, PipelineResult};

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Load-balancing strategy for spreading messages across partitions
///
/// Rendered to the closest librdkafka partitioner: there is no exact
/// least-bytes equivalent, so that strategy maps to consistent-random
/// spreading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Balance {
    #[default]
    RoundRobin,
    LeastBytes,
    ConsistentHash,
}

impl Balance {
    /// The librdkafka `partitioner` property value
    pub fn partitioner(&self) -> &'static str {
        match self {
            Self::RoundRobin => "random",
            Self::LeastBytes => "consistent_random",
            Self::ConsistentHash => "murmur2_random",
        }
    }

    /// Parse from a configuration string
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "roundRobin" => Ok(Self::RoundRobin),
            "leastBytes" => Ok(Self::LeastBytes),
            "hash" => Ok(Self::ConsistentHash),
            other => Err(format!(
                "unknown balance strategy '{}', expected one of: roundRobin, leastBytes, hash",
                other
            )),
        }
    }
}

/// Broker acknowledgment level required before a write is considered durable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequiredAcks {
    None,
    #[default]
    Leader,
    All,
}

impl RequiredAcks {
    /// The librdkafka `request.required.acks` property value
    pub fn value(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Leader => "1",
            Self::All => "-1",
        }
    }

    /// Parse from a configuration string
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "none" => Ok(Self::None),
            "leader" => Ok(Self::Leader),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown acks level '{}', expected one of: none, leader, all",
                other
            )),
        }
    }
}

/// Compression mode applied to outbound message sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Snappy,
    Lz4,
    Zstd,
}

impl Compression {
    /// The librdkafka `compression.codec` property value
    pub fn codec(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Snappy => "snappy",
            Self::Lz4 => "lz4",
            Self::Zstd => "zstd",
        }
    }

    /// Parse from a configuration string
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "none" => Ok(Self::None),
            "gzip" => Ok(Self::Gzip),
            "snappy" => Ok(Self::Snappy),
            "lz4" => Ok(Self::Lz4),
            "zstd" => Ok(Self::Zstd),
            other => Err(format!(
                "unknown compression '{}', expected one of: none, gzip, snappy, lz4, zstd",
                other
            )),
        }
    }
}

/// Configuration for the Kafka sink
#[derive(Debug, Clone)]
pub struct KafkaSinkConfig {
    /// Broker endpoints (host:port)
    pub brokers: Vec<String>,

    /// Destination topic pattern, e.g. `logs-{app}`
    pub topic: String,

    /// Transport-level retry ceiling per message
    pub max_attempts: usize,

    /// Partition load-balancing strategy
    pub balance: Balance,

    /// Messages accumulated before the transport flushes a message set
    pub batch_size: usize,

    /// Bytes accumulated before the transport flushes a message set
    pub batch_bytes: usize,

    /// Maximum linger before a partial message set is flushed
    pub batch_timeout: Duration,

    /// Socket read timeout
    pub read_timeout: Duration,

    /// Per-message delivery timeout
    pub write_timeout: Duration,

    /// Required acknowledgment level
    pub required_acks: RequiredAcks,

    /// Compression mode
    pub compression: Compression,
}

impl Default for KafkaSinkConfig {
    fn default() -> Self {
        Self {
            brokers: Vec::new(),
            topic: String::new(),
            max_attempts: 10,
            balance: Balance::default(),
            batch_size: 100,
            batch_bytes: 1024 * 1024,
            batch_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(10),
            required_acks: RequiredAcks::default(),
            compression: Compression::default(),
        }
    }
}

impl KafkaSinkConfig {
    /// Create a config for the given brokers and topic pattern
    pub fn new(brokers: Vec<String>, topic: impl Into<String>) -> Self {
        Self {
            brokers,
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Set the transport retry ceiling
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the load-balancing strategy
    #[must_use]
    pub fn with_balance(mut self, balance: Balance) -> Self {
        self.balance = balance;
        self
    }

    /// Set the message-count batch threshold
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Set the byte batch threshold
    #[must_use]
    pub fn with_batch_bytes(mut self, bytes: usize) -> Self {
        self.batch_bytes = bytes;
        self
    }

    /// Set the batch linger timeout
    #[must_use]
    pub fn with_batch_timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = timeout;
        self
    }

    /// Set the per-message delivery timeout
    #[must_use]
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set the required acknowledgment level
    #[must_use]
    pub fn with_required_acks(mut self, acks: RequiredAcks) -> Self {
        self.required_acks = acks;
        self
    }

    /// Set the compression mode
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.brokers.is_empty() {
            return Err("brokers must not be empty".to_string());
        }
        if self.topic.is_empty() {
            return Err("topic must not be empty".to_string());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        Ok(())
    }

    /// Parse from the raw factory config map
    pub fn from_raw(raw: &ComponentConfig) -> PipelineResult<Self> {
        let mut config = Self::default();

        if let Some(brokers) = raw.get("brokers").and_then(|v| v.as_array()) {
            config.brokers = brokers
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect();
        }

        if let Some(topic) = raw.get("topic").and_then(|v| v.as_str()) {
            config.topic = topic.to_string();
        }

        if let Some(attempts) = raw.get("maxAttempts").and_then(|v| v.as_integer()) {
            config.max_attempts = attempts as usize;
        }

        if let Some(balance) = raw.get("balance").and_then(|v| v.as_str()) {
            config.balance = Balance::parse(balance).map_err(invalid)?;
        }

        if let Some(size) = raw.get("batchSize").and_then(|v| v.as_integer()) {
            config.batch_size = size as usize;
        }

        if let Some(bytes) = raw.get("batchBytes").and_then(|v| v.as_integer()) {
            config.batch_bytes = bytes as usize;
        }

        if let Some(ms) = raw.get("batchTimeoutMs").and_then(|v| v.as_integer()) {
            config.batch_timeout = Duration::from_millis(ms as u64);
        }

        if let Some(ms) = raw.get("readTimeoutMs").and_then(|v| v.as_integer()) {
            config.read_timeout = Duration::from_millis(ms as u64);
        }

        if let Some(ms) = raw.get("writeTimeoutMs").and_then(|v| v.as_integer()) {
            config.write_timeout = Duration::from_millis(ms as u64);
        }

        if let Some(acks) = raw.get("requiredAcks").and_then(|v| v.as_str()) {
            config.required_acks = RequiredAcks::parse(acks).map_err(invalid)?;
        }

        if let Some(compression) = raw.get("compression").and_then(|v| v.as_str()) {
            config.compression = Compression::parse(compression).map_err(invalid)?;
        }

        config.validate().map_err(invalid)?;

        Ok(config)
    }
}

fn invalid(reason: String) -> PipelineError {
    PipelineError::invalid_config(format!("kafka: {}", reason))
}
