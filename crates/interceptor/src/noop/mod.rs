//! Noop Interceptor - Pass-through stage
//!
//! Hands every invocation straight to the continuation. Useful for
//! exercising chain infrastructure and as a placeholder during development.

use std::future::Future;
use std::pin::Pin;

use skiff_pipeline::{
    Category, Component, ComponentConfig, ComponentContext, ComponentFactory, Interceptor,
    Invocation, Invoker, PipelineComponent, PipelineResult,
};
use skiff_protocol::SinkResult;

#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

/// Registered type name of this interceptor
pub const TYPE: &str = "noop";

/// An interceptor that passes invocations through unchanged
#[derive(Debug, Default)]
pub struct NoopInterceptor {
    name: String,
}

impl NoopInterceptor {
    /// Create a new noop interceptor
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for NoopInterceptor {
    fn category(&self) -> Category {
        Category::Interceptor
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }

    fn init(&mut self, context: &ComponentContext) -> PipelineResult<()> {
        self.name = context.component_name().to_string();
        Ok(())
    }
}

impl Interceptor for NoopInterceptor {
    fn intercept<'a>(
        &'a self,
        invoker: Invoker<'a>,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>> {
        invoker.invoke(invocation)
    }
}

/// Factory for `noop` interceptors
pub struct NoopFactory;

impl ComponentFactory for NoopFactory {
    fn create(&self, _config: &ComponentConfig) -> PipelineResult<PipelineComponent> {
        Ok(PipelineComponent::Interceptor(Box::new(
            NoopInterceptor::new(),
        )))
    }

    fn component_type(&self) -> &'static str {
        TYPE
    }
}
