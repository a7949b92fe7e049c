//! Interceptor Chain - Ordered chain-of-responsibility over a batch
//!
//! The `Chain` orders the interceptors configured for a pipeline, filters
//! out those whose `belong_to` set excludes it, and appends the sink as the
//! terminal link. Traversal hands each link an `Invoker` continuation that
//! wraps the remainder of the chain.
//!
//! # Design
//!
//! - **Deterministic construction**: stable sort by `order()`, ties keep
//!   registration order - the same input always yields the same chain
//! - **Fail-fast**: a link's failure result propagates upward unchanged;
//!   nothing inside the chain retries
//! - **No fan-out**: one batch, one execution unit, one traversal

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::{Interceptor, Sink};
use skiff_protocol::{Batch, SinkResult};

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;

/// Transient wrapper binding a batch to one chain traversal
///
/// Exists only for the duration of the traversal; never persisted.
#[derive(Debug)]
pub struct Invocation {
    batch: Batch,
}

impl Invocation {
    /// Wrap a batch for traversal
    pub fn new(batch: Batch) -> Self {
        Self { batch }
    }

    /// The batch under traversal
    #[inline]
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// The batch under traversal, for in-place event mutation
    #[inline]
    pub fn batch_mut(&mut self) -> &mut Batch {
        &mut self.batch
    }

    /// Consume the invocation, yielding the batch
    pub fn into_batch(self) -> Batch {
        self.batch
    }
}

/// Continuation over the remainder of a chain
///
/// Each link receives an `Invoker` wrapping everything after itself; calling
/// `invoke` advances the cursor. The terminal step hands the batch to the
/// sink.
pub struct Invoker<'a> {
    links: &'a [Box<dyn Interceptor>],
    sink: &'a dyn Sink,
}

impl<'a> Invoker<'a> {
    /// Advance the traversal by one link
    pub fn invoke(
        self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>> {
        match self.links.split_first() {
            Some((head, rest)) => head.intercept(
                Invoker {
                    links: rest,
                    sink: self.sink,
                },
                invocation,
            ),
            None => self.sink.consume(invocation.into_batch()),
        }
    }
}

/// Ordered interceptor chain terminated by a sink
pub struct Chain {
    interceptors: Vec<Box<dyn Interceptor>>,
    sink: Box<dyn Sink>,
}

impl Chain {
    /// Build the chain for one pipeline
    ///
    /// Interceptors whose non-empty `belong_to` set excludes
    /// `pipeline_name` are filtered out; the remainder is stable-sorted by
    /// `order()` ascending. Construction is deterministic: the same
    /// interceptor set, filters, and orders always produce the same chain.
    pub fn new(
        interceptors: Vec<Box<dyn Interceptor>>,
        sink: Box<dyn Sink>,
        pipeline_name: &str,
    ) -> Self {
        let mut active: Vec<Box<dyn Interceptor>> = interceptors
            .into_iter()
            .filter(|i| {
                let belong_to = i.belong_to();
                belong_to.is_empty() || belong_to.iter().any(|name| name == pipeline_name)
            })
            .collect();

        // Vec::sort_by_key is stable: ties keep registration order
        active.sort_by_key(|i| i.order());

        debug!(
            pipeline = pipeline_name,
            links = ?active.iter().map(|i| i.component_type()).collect::<Vec<_>>(),
            sink = sink.component_type(),
            "interceptor chain built"
        );

        Self {
            interceptors: active,
            sink,
        }
    }

    /// Traverse the chain with one batch
    ///
    /// Returns the terminal result propagated back up: `None` when the sink
    /// had nothing to do (empty batch), otherwise `Some(SinkResult)`.
    pub async fn process(&self, batch: Batch) -> Option<SinkResult> {
        let head = Invoker {
            links: &self.interceptors,
            sink: self.sink.as_ref(),
        };
        head.invoke(Invocation::new(batch)).await
    }

    /// Per-stage retry opt-out flags, in chain order
    ///
    /// The external retry controller consults these when deciding whether a
    /// `Fail` result is eligible for re-submission: a failure attributable
    /// to a stage reporting `true` must never trigger a batch retry.
    pub fn ignore_retry_flags(&self) -> Vec<(&'static str, bool)> {
        self.interceptors
            .iter()
            .map(|i| (i.component_type(), i.ignore_retry()))
            .collect()
    }

    /// Type names of the active links, in chain order (sink excluded)
    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors
            .iter()
            .map(|i| i.component_type())
            .collect()
    }

    /// Number of active interceptors (sink excluded)
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Check if the chain has no interceptors
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// The terminal sink
    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    /// Stop every link, interceptors first, then the sink
    ///
    /// Each component's one-shot done signal fires exactly once; correct
    /// callers invoke this at most once.
    pub fn stop(&mut self) {
        for interceptor in &mut self.interceptors {
            interceptor.stop();
        }
        self.sink.stop();
    }
}
