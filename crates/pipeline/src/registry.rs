//! Component Registry - Frozen factory lookup table
//!
//! Maps `(category, type name)` to a factory so pipelines can be built from
//! configuration. Registration happens during process initialization,
//! strictly before any pipeline is constructed; `freeze` then installs the
//! table process-wide, after which it is read concurrently without locking.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = ComponentRegistry::new();
//! registry.register(Category::Interceptor, "normalize", NormalizeFactory);
//! registry.register(Category::Sink, "kafka", KafkaFactory);
//! registry.freeze();
//!
//! // From config, anywhere in the process:
//! let component = ComponentRegistry::global()
//!     .create(Category::Sink, "kafka", &config)?;
//! ```

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::{Category, ComponentConfig, Interceptor, PipelineError, PipelineResult, Sink};

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

static GLOBAL_REGISTRY: OnceCell<ComponentRegistry> = OnceCell::new();

/// A component produced by a registry factory
///
/// Factories return this sum so one registry can hold heterogeneous stage
/// kinds; callers unwrap the variant matching the category they asked for.
pub enum PipelineComponent {
    /// A mid-chain stage
    Interceptor(Box<dyn Interceptor>),

    /// A terminal stage
    Sink(Box<dyn Sink>),
}

impl PipelineComponent {
    /// The category of the contained component
    pub fn category(&self) -> Category {
        match self {
            Self::Interceptor(_) => Category::Interceptor,
            Self::Sink(_) => Category::Sink,
        }
    }

    /// Unwrap as an interceptor
    pub fn into_interceptor(self) -> PipelineResult<Box<dyn Interceptor>> {
        match self {
            Self::Interceptor(interceptor) => Ok(interceptor),
            other => Err(PipelineError::CategoryMismatch {
                expected: Category::Interceptor,
                actual: other.category(),
            }),
        }
    }

    /// Unwrap as a sink
    pub fn into_sink(self) -> PipelineResult<Box<dyn Sink>> {
        match self {
            Self::Sink(sink) => Ok(sink),
            other => Err(PipelineError::CategoryMismatch {
                expected: Category::Sink,
                actual: other.category(),
            }),
        }
    }
}

/// Factory trait for creating pipeline components
///
/// Implementations parse and validate the raw config map into their typed
/// config struct; the returned component still awaits `init` and `start`.
pub trait ComponentFactory: Send + Sync {
    /// Create a component instance from raw configuration
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidConfig` if the configuration is
    /// malformed or fails validation.
    fn create(&self, config: &ComponentConfig) -> PipelineResult<PipelineComponent>;

    /// The type name this factory builds (for error messages)
    fn component_type(&self) -> &'static str;
}

impl<'a> std::fmt::Debug for dyn ComponentFactory + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("component_type", &self.component_type())
            .finish()
    }
}

/// Process-wide mapping from component identity to factory
pub struct ComponentRegistry {
    factories: HashMap<(Category, String), Box<dyn ComponentFactory>>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a component factory
    ///
    /// # Panics
    ///
    /// Panics if a factory is already registered under this
    /// `(category, type name)` key. Silent shadowing of a processing stage
    /// is never acceptable; use `try_register` for fallible registration.
    pub fn register<F: ComponentFactory + 'static>(
        &mut self,
        category: Category,
        type_name: &str,
        factory: F,
    ) {
        let key = (category, type_name.to_string());
        if self.factories.contains_key(&key) {
            panic!(
                "component factory '{}/{}' already registered",
                category, type_name
            );
        }
        self.factories.insert(key, Box::new(factory));
    }

    /// Try to register a component factory
    ///
    /// Returns `false` if the key is already taken.
    pub fn try_register<F: ComponentFactory + 'static>(
        &mut self,
        category: Category,
        type_name: &str,
        factory: F,
    ) -> bool {
        let key = (category, type_name.to_string());
        if self.factories.contains_key(&key) {
            return false;
        }
        self.factories.insert(key, Box::new(factory));
        true
    }

    /// Look up the factory for a component type
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::UnknownComponentType` if absent - a
    /// configuration error surfaced to the operator, never retried.
    pub fn lookup(
        &self,
        category: Category,
        type_name: &str,
    ) -> PipelineResult<&dyn ComponentFactory> {
        self.factories
            .get(&(category, type_name.to_string()))
            .map(|f| f.as_ref())
            .ok_or_else(|| PipelineError::UnknownComponentType {
                category,
                type_name: type_name.to_string(),
                available: self.available_types(category).join(", "),
            })
    }

    /// Look up and invoke the factory for a component type
    pub fn create(
        &self,
        category: Category,
        type_name: &str,
        config: &ComponentConfig,
    ) -> PipelineResult<PipelineComponent> {
        self.lookup(category, type_name)?.create(config)
    }

    /// Check if a component type is registered
    pub fn contains(&self, category: Category, type_name: &str) -> bool {
        self.factories
            .contains_key(&(category, type_name.to_string()))
    }

    /// List registered type names within a category
    pub fn available_types(&self, category: Category) -> Vec<&str> {
        let mut types: Vec<&str> = self
            .factories
            .keys()
            .filter(|(c, _)| *c == category)
            .map(|(_, name)| name.as_str())
            .collect();
        types.sort_unstable();
        types
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Install this registry as the process-wide frozen table
    ///
    /// After freezing, `global()` reads the table lock-free. Must be called
    /// once, at the end of the registration phase, strictly before any
    /// pipeline is built.
    ///
    /// # Panics
    ///
    /// Panics if a registry has already been frozen.
    pub fn freeze(self) {
        if GLOBAL_REGISTRY.set(self).is_err() {
            panic!("component registry already frozen");
        }
    }

    /// The process-wide frozen registry
    ///
    /// # Panics
    ///
    /// Panics if called before `freeze` - pipelines must never be built
    /// before the registration phase completes.
    pub fn global() -> &'static ComponentRegistry {
        GLOBAL_REGISTRY
            .get()
            .expect("component registry not frozen; register components at process start first")
    }

    /// The process-wide frozen registry, if the registration phase has run
    pub fn try_global() -> Option<&'static ComponentRegistry> {
        GLOBAL_REGISTRY.get()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
