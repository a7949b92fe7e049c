//! Tests for the component registry

use super::*;
use crate::{Component, ComponentContext, Invocation, Invoker};
use skiff_protocol::SinkResult;
use std::future::Future;
use std::pin::Pin;

/// Minimal pass-through interceptor for registry tests
struct PassInterceptor;

impl Component for PassInterceptor {
    fn category(&self) -> Category {
        Category::Interceptor
    }

    fn component_type(&self) -> &'static str {
        "pass"
    }

    fn init(&mut self, _context: &ComponentContext) -> PipelineResult<()> {
        Ok(())
    }
}

impl Interceptor for PassInterceptor {
    fn intercept<'a>(
        &'a self,
        invoker: Invoker<'a>,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Option<SinkResult>> + Send + 'a>> {
        invoker.invoke(invocation)
    }
}

struct PassFactory;

impl ComponentFactory for PassFactory {
    fn create(&self, _config: &ComponentConfig) -> PipelineResult<PipelineComponent> {
        Ok(PipelineComponent::Interceptor(Box::new(PassInterceptor)))
    }

    fn component_type(&self) -> &'static str {
        "pass"
    }
}

#[test]
fn test_empty_registry() {
    let registry = ComponentRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry
        .available_types(Category::Interceptor)
        .is_empty());
}

#[test]
fn test_register_and_create() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);

    assert!(registry.contains(Category::Interceptor, "pass"));
    assert!(!registry.contains(Category::Sink, "pass"));

    let config = ComponentConfig::new();
    let component = registry
        .create(Category::Interceptor, "pass", &config)
        .unwrap();
    assert_eq!(component.category(), Category::Interceptor);
}

#[test]
#[should_panic(expected = "already registered")]
fn test_duplicate_registration_panics() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);
    registry.register(Category::Interceptor, "pass", PassFactory);
}

#[test]
fn test_distinct_type_names_coexist() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);
    registry.register(Category::Interceptor, "pass2", PassFactory);

    assert!(registry.lookup(Category::Interceptor, "pass").is_ok());
    assert!(registry.lookup(Category::Interceptor, "pass2").is_ok());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_same_type_name_across_categories() {
    // (category, type name) is the key: the same name may appear once per
    // category.
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);
    assert!(registry.try_register(Category::Sink, "pass", PassFactory));
}

#[test]
fn test_try_register_returns_false_on_duplicate() {
    let mut registry = ComponentRegistry::new();
    assert!(registry.try_register(Category::Interceptor, "pass", PassFactory));
    assert!(!registry.try_register(Category::Interceptor, "pass", PassFactory));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unknown_component_type() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);

    let err = registry
        .lookup(Category::Interceptor, "missing")
        .unwrap_err();
    assert!(matches!(err, PipelineError::UnknownComponentType { .. }));
    assert!(err.to_string().contains("interceptor/missing"));
    assert!(err.to_string().contains("pass"));
}

#[test]
fn test_category_mismatch_on_unwrap() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);

    let component = registry
        .create(Category::Interceptor, "pass", &ComponentConfig::new())
        .unwrap();
    let err = component.into_sink().unwrap_err();
    assert!(matches!(err, PipelineError::CategoryMismatch { .. }));
}

#[test]
fn test_freeze_and_global() {
    let mut registry = ComponentRegistry::new();
    registry.register(Category::Interceptor, "pass", PassFactory);
    registry.freeze();

    let global = ComponentRegistry::global();
    assert!(global.contains(Category::Interceptor, "pass"));
    assert!(ComponentRegistry::try_global().is_some());
}
