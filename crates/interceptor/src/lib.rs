//! Skiff Interceptor - Built-in chain stages
//!
//! Interceptors inspect or mutate events mid-chain, then hand the invocation
//! to the continuation. They must be fast, never block on I/O, and never
//! drop or reorder the events of a batch.
//!
//! # Built-in stages
//!
//! - `normalize` - extracts named fields from unstructured log bodies and
//!   attaches them under the reserved `systemLogBody` header key
//! - `noop` - passes the invocation straight through; used to exercise the
//!   chain infrastructure
//!
//! # Example
//!
//! ```ignore
//! let mut registry = ComponentRegistry::new();
//! registry.register(Category::Interceptor, "normalize", NormalizeFactory);
//!
//! // From config: { pattern = "(?<level>[A-Z]+)\\s(?<msg>.+)", order = 700 }
//! let interceptor = registry
//!     .create(Category::Interceptor, "normalize", &config)?
//!     .into_interceptor()?;
//! ```

pub mod noop;
pub mod normalize;

pub use noop::{NoopFactory, NoopInterceptor};
pub use normalize::{NormalizeConfig, NormalizeFactory, NormalizeInterceptor};
