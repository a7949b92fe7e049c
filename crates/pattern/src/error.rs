//! Pattern error types

use thiserror::Error;

/// Errors that can occur when compiling or evaluating patterns
#[derive(Debug, Error)]
pub enum PatternError {
    /// Pattern syntax is malformed - fatal at init time
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A route pattern referenced a field absent from the supplied mapping
    #[error("unresolved field '{field}' in route pattern")]
    UnresolvedField { field: String },
}

impl PatternError {
    /// Create an invalid pattern error
    pub fn invalid(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an unresolved field error
    pub fn unresolved(field: impl Into<String>) -> Self {
        Self::UnresolvedField {
            field: field.into(),
        }
    }
}
