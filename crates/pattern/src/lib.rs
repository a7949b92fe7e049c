//! Skiff Pattern - Text extraction and destination routing patterns
//!
//! Two pattern dialects are handled here, both compiled once at component
//! init time and evaluated per event at dispatch time:
//!
//! - `Matcher` - a regular expression with Java-style named capture groups
//!   (`(?<name>...)`), used to extract fields from unstructured log bodies.
//!   The foreign named-group syntax is normalized to the native `(?P<name>...)`
//!   form before compilation.
//! - `RoutePattern` - a destination template such as `logs-{app}`, parsed
//!   into a sequence of literal and field-reference segments. Resolution
//!   substitutes field values; a missing referenced field is an error.
//!
//! # Design
//!
//! - **Compile once**: malformed syntax fails fatally at init, never per event
//! - **No-match is normal**: extraction returns an empty map, not an error -
//!   heterogeneous log streams frequently miss the pattern
//! - **Immutable after compile**: both types are safely shared read-only
//!   across concurrent invocations

mod error;
mod matcher;
mod route;

pub use error::PatternError;
pub use matcher::Matcher;
pub use route::{RoutePattern, Segment};

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
