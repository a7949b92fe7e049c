//! Normalize interceptor configuration

use skiff_pipeline::{ComponentConfig, PipelineError, PipelineResult, DEFAULT_INTERCEPTOR_ORDER};

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Configuration for the normalize interceptor
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Extraction pattern with named capture groups
    ///
    /// Java-style `(?<name>...)` groups are accepted.
    pub pattern: String,

    /// Chain position; lower runs earlier. Default: 900
    pub order: i32,

    /// Pipelines this instance applies to; empty applies to all
    pub belong_to: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            order: DEFAULT_INTERCEPTOR_ORDER,
            belong_to: Vec::new(),
        }
    }
}

impl NormalizeConfig {
    /// Create a config with the given extraction pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Set the chain position
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Restrict to specific pipelines
    pub fn with_belong_to(mut self, pipelines: Vec<String>) -> Self {
        self.belong_to = pipelines;
        self
    }

    /// Validate the configuration
    ///
    /// Pattern compilation itself is deferred to component init, where a
    /// malformed pattern surfaces as a startup error.
    pub fn validate(&self) -> Result<(), String> {
        if self.pattern.is_empty() {
            return Err("pattern must not be empty".to_string());
        }
        Ok(())
    }

    /// Parse from the raw factory config map
    pub fn from_raw(raw: &ComponentConfig) -> PipelineResult<Self> {
        let mut config = Self::default();

        if let Some(pattern) = raw.get("pattern").and_then(|v| v.as_str()) {
            config.pattern = pattern.to_string();
        }

        if let Some(order) = raw.get("order").and_then(|v| v.as_integer()) {
            config.order = order as i32;
        }

        if let Some(belong_to) = raw.get("belongTo").and_then(|v| v.as_array()) {
            config.belong_to = belong_to
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect();
        }

        config
            .validate()
            .map_err(|reason| PipelineError::invalid_config(format!("normalize: {}", reason)))?;

        Ok(config)
    }
}
