//! SinkResult - Batch-level dispatch outcome
//!
//! A chain traversal yields `Option<SinkResult>`: `Some(Success)` when the
//! batch was delivered, `Some(Fail)` when it must be considered undelivered,
//! and `None` when the batch was empty and there was nothing to do. Callers
//! must treat `None` as "no-op, not an error" - it is distinct from an
//! explicit `Success`.

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;

/// Boxed error carried by a failed dispatch, unmodified from its origin
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of dispatching one batch
///
/// The wrapped error propagates up the chain unchanged so the external
/// retry controller can classify it with full fidelity.
#[derive(Debug)]
pub enum SinkResult {
    /// The whole batch was delivered
    Success,

    /// The whole batch must be considered undelivered
    Fail(BoxError),
}

impl SinkResult {
    /// Create a failure result wrapping the causing error
    pub fn fail(err: impl Into<BoxError>) -> Self {
        Self::Fail(err.into())
    }

    /// Check whether the batch was delivered
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check whether the batch failed
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Get the causing error of a failure, if any
    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::Success => None,
            Self::Fail(err) => Some(err.as_ref()),
        }
    }
}
