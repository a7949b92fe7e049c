//! Skiff Protocol - Core types flowing through the pipeline
//!
//! This crate provides the foundational types that every other Skiff crate
//! builds on:
//! - `Event` - One unit of log data (immutable body, mutable header)
//! - `Batch` - An ordered group of events processed atomically
//! - `SinkResult` - The batch-level dispatch outcome
//!
//! # Design Principles
//!
//! - **Zero-copy bodies**: Event bodies are `bytes::Bytes`, so batches can be
//!   assembled from a shared read buffer without copying
//! - **Header-only mutation**: Interceptors attach derived data to headers;
//!   the body is never rewritten after collection
//! - **Batch atomicity**: A batch is dispatched as a whole or not at all;
//!   partial-failure policy lives in the external retry controller

mod batch;
mod event;
mod result;

pub use batch::Batch;
pub use event::Event;
pub use result::{BoxError, SinkResult};

// Re-export bytes for convenience
pub use bytes::Bytes;

/// Reserved header key holding the field mapping produced by normalization.
///
/// Downstream stages (including sink codecs) rely on this key's presence and
/// shape: a JSON object of string values, one per extracted named group.
pub const SYSTEM_LOG_BODY_KEY: &str = "systemLogBody";
