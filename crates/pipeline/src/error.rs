//! Pipeline error types
//!
//! All variants here are configuration or startup errors: fatal, surfaced to
//! the operator, never retried. Runtime dispatch failures travel as
//! `SinkResult::Fail` instead.

use thiserror::Error;

use crate::Category;
use skiff_pattern::PatternError;

/// Errors that can occur while building or starting a pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No factory registered under (category, type name)
    #[error("unknown component type '{category}/{type_name}', available: [{available}]")]
    UnknownComponentType {
        category: Category,
        type_name: String,
        available: String,
    },

    /// A factory was asked to produce a different category than it builds
    #[error("component category mismatch: expected {expected}, got {actual}")]
    CategoryMismatch { expected: Category, actual: Category },

    /// Component configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An extraction or routing pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] PatternError),

    /// A component failed to acquire its live resources
    #[error("component startup failed: {0}")]
    Startup(String),
}

impl PipelineError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a startup error
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }
}
