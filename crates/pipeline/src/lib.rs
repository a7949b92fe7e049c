//! Skiff Pipeline - Component plugin framework and interceptor chain
//!
//! This crate defines the contracts every processing stage implements and
//! the machinery that composes them:
//!
//! - `Component` - the common lifecycle (configure at creation, then
//!   init -> start -> process -> stop)
//! - `ComponentRegistry` - process-wide `(category, type name) -> factory`
//!   mapping, frozen after the registration phase
//! - `Chain` / `Invoker` / `Invocation` - ordered chain-of-responsibility
//!   traversal over a batch, terminated by the sink
//!
//! # Architecture
//!
//! ```text
//! [Batch] -> [Interceptor 1] -> [Interceptor 2] -> ... -> [Sink] -> Option<SinkResult>
//! ```
//!
//! Each interceptor receives the remainder of the chain as a continuation
//! (`Invoker`) and either calls it or short-circuits with its own result.
//! The result propagates back up unchanged.
//!
//! # Concurrency
//!
//! Components must be safe to invoke concurrently across batches; each batch
//! is owned by a single execution unit end-to-end. The registry is read
//! lock-free once frozen, and compiled patterns are immutable after init.

mod chain;
mod error;
mod registry;

pub use chain::{Chain, Invocation, Invoker};
pub use error::PipelineError;
pub use registry::{ComponentFactory, ComponentRegistry, PipelineComponent};

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use skiff_protocol::{Batch, SinkResult};

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Raw configuration handed to component factories
///
/// A generic key-value map that each factory interprets according to its
/// typed config struct.
pub type ComponentConfig = HashMap<String, toml::Value>;

/// The kind of processing stage a component implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Produces batches (external collaborator; registered for completeness)
    Source,

    /// Inspects or mutates batches mid-chain
    Interceptor,

    /// Terminal stage delivering batches externally
    Sink,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Interceptor => write!(f, "interceptor"),
            Self::Sink => write!(f, "sink"),
        }
    }
}

/// Identity handed to a component at init time
#[derive(Debug, Clone)]
pub struct ComponentContext {
    pipeline_name: String,
    component_name: String,
}

impl ComponentContext {
    /// Create a context binding a component instance to its pipeline
    pub fn new(pipeline_name: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            component_name: component_name.into(),
        }
    }

    /// Name of the owning pipeline
    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    /// Instance name of the component within the pipeline
    pub fn component_name(&self) -> &str {
        &self.component_name
    }
}

/// Common lifecycle contract implemented by every processing stage
///
/// # Lifecycle
///
/// A component is constructed by a registry factory (which parses and
/// validates its raw config), then driven through:
///
/// 1. `init` - binds the instance name, compiles patterns and codecs
/// 2. `start` - acquires live resources (e.g. the sink's transport session)
/// 3. zero or more invocations
/// 4. `stop` - cancels the one-shot done signal and releases resources
///
/// A component is never reused across pipelines and never restarted after
/// `stop`. Correct callers invoke `stop` at most once.
pub trait Component: Send + Sync {
    /// The category this component belongs to
    fn category(&self) -> Category;

    /// The registered type name of this component
    fn component_type(&self) -> &'static str;

    /// Bind identity and compile configuration into runtime state
    ///
    /// Failures here are configuration errors, fatal at startup.
    fn init(&mut self, context: &ComponentContext) -> PipelineResult<()>;

    /// Acquire live resources
    ///
    /// Default implementation is a no-op for stages holding none.
    fn start(&mut self) -> PipelineResult<()> {
        Ok(())
    }

    /// Release resources and signal cancellation to background activity
    ///
    /// Must tolerate `start` never having been reached.
    fn stop(&mut self) {}
}

/// A pluggable chain stage that inspects or transforms events before the sink
pub trait Interceptor: Component {
    /// Chain position; ascending order runs earlier. Ties keep registration
    /// order.
    fn order(&self) -> i32 {
        DEFAULT_INTERCEPTOR_ORDER
    }

    /// Pipelines this interceptor applies to; empty applies to all
    fn belong_to(&self) -> &[String] {
        &[]
    }

    /// Whether failures attributable to this stage must suppress upstream
    /// retry of the batch
    fn ignore_retry(&self) -> bool {
        true
    }

    /// Process one invocation
    ///
    /// Exactly one of the following happens per call: the continuation is
    /// invoked (`invoker.invoke(invocation)`), or a result is returned early
    /// without invoking it. The continuation's result propagates upward
    /// unchanged unless deliberately wrapped.
    fn intercept<'a>(
        &'a self,
        invoker: Invoker<'a>,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>>;
}

/// Terminal chain stage that encodes and transports a batch externally
pub trait Sink: Component {
    /// Deliver one batch
    ///
    /// Returns `None` for an empty batch (nothing to do), `Some(Success)` on
    /// delivery, `Some(Fail)` when the whole batch must be considered
    /// undelivered.
    fn consume<'a>(
        &'a self,
        batch: Batch,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>>;
}

impl fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("component_type", &self.component_type())
            .finish()
    }
}

/// Default chain position for extension interceptors
pub const DEFAULT_INTERCEPTOR_ORDER: i32 = 900;
