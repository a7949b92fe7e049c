//! Normalize Interceptor - Field extraction from unstructured log bodies
//!
//! Runs the configured extraction pattern against each event body. When at
//! least one named group matches, the whole field mapping is attached to the
//! event header under the reserved `systemLogBody` key. Events with empty
//! bodies or no matched fields pass through unmodified - a non-matching
//! pattern is a designed no-match outcome, never an error.
//!
//! The stage mutates headers only; it never drops, splits, or reorders
//! events, and it always hands the invocation to the continuation.
//!
//! # Header contract
//!
//! ```text
//! pattern:  (?<level>[A-Z]+)\s(?<msg>.+)
//! body:     "ERROR disk full"
//! header:   systemLogBody = { "level": "ERROR", "msg": "disk full" }
//! ```
//!
//! Failures attributable to this stage (a pattern that cannot possibly
//! match) must never cause the batch to be retried upstream, so
//! `ignore_retry` reports `true`.

mod config;

pub use config::NormalizeConfig;

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::info;

use skiff_pattern::Matcher;
use skiff_pipeline::{
    Category, Component, ComponentConfig, ComponentContext, ComponentFactory, Interceptor,
    Invocation, Invoker, PipelineComponent, PipelineResult,
};
use skiff_protocol::{SinkResult, SYSTEM_LOG_BODY_KEY};

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

/// Registered type name of this interceptor
pub const TYPE: &str = "normalize";

/// Interceptor that extracts named fields into the `systemLogBody` header
pub struct NormalizeInterceptor {
    config: NormalizeConfig,
    name: String,
    matcher: Option<Matcher>,
    done: CancellationToken,
}

impl NormalizeInterceptor {
    /// Create an interceptor from a validated config
    ///
    /// The pattern is compiled at `init`, not here.
    pub fn new(config: NormalizeConfig) -> Self {
        Self {
            config,
            name: String::new(),
            matcher: None,
            done: CancellationToken::new(),
        }
    }

    /// Instance name bound at init
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for NormalizeInterceptor {
    fn category(&self) -> Category {
        Category::Interceptor
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }

    fn init(&mut self, context: &ComponentContext) -> PipelineResult<()> {
        self.name = context.component_name().to_string();
        info!(
            pipeline = context.pipeline_name(),
            name = %self.name,
            pattern = %self.config.pattern,
            "compiling normalize pattern"
        );
        self.matcher = Some(Matcher::compile(&self.config.pattern)?);
        Ok(())
    }

    fn stop(&mut self) {
        self.done.cancel();
    }
}

impl Interceptor for NormalizeInterceptor {
    fn order(&self) -> i32 {
        self.config.order
    }

    fn belong_to(&self) -> &[String] {
        &self.config.belong_to
    }

    fn ignore_retry(&self) -> bool {
        true
    }

    fn intercept<'a>(
        &'a self,
        invoker: Invoker<'a>,
        mut invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>> {
        let matcher = self
            .matcher
            .as_ref()
            .expect("normalize interceptor invoked before init");

        for event in invocation.batch_mut().events_mut() {
            if event.body().is_empty() {
                continue;
            }

            let body = String::from_utf8_lossy(event.body());
            let fields = matcher.extract(&body);
            if fields.is_empty() {
                continue;
            }

            let mapping = fields
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect();
            event
                .header_mut()
                .insert(SYSTEM_LOG_BODY_KEY.to_string(), Value::Object(mapping));
        }

        invoker.invoke(invocation)
    }
}

/// Factory for `normalize` interceptors
pub struct NormalizeFactory;

impl ComponentFactory for NormalizeFactory {
    fn create(&self, config: &ComponentConfig) -> PipelineResult<PipelineComponent> {
        let config = NormalizeConfig::from_raw(config)?;
        Ok(PipelineComponent::Interceptor(Box::new(
            NormalizeInterceptor::new(config),
        )))
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }
}
