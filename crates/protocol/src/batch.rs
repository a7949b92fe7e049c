//! Batch - Ordered group of events processed atomically
//!
//! A batch is the unit of work that traverses the interceptor chain and is
//! dispatched by the sink. All events in a batch are delivered together; the
//! chain never splits or partially re-queues a batch.

use crate::event::Event;

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;

/// Ordered sequence of events processed as one atomic unit
///
/// # Invariants
///
/// - Event order entering the chain equals event order leaving each stage;
///   interceptors must not reorder or split a batch
/// - A batch is handled by a single execution unit end-to-end, so no
///   synchronization is needed on the events themselves
#[derive(Debug, Clone, Default)]
pub struct Batch {
    events: Vec<Event>,
}

impl Batch {
    /// Create a batch from an ordered list of events
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Create an empty batch
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Get the events in batch order
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get the events for in-place mutation
    ///
    /// Stages may mutate event headers but must preserve order and count.
    #[inline]
    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    /// Number of events in this batch
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the batch carries no events
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the batch, yielding its events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl From<Vec<Event>> for Batch {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl FromIterator<Event> for Batch {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
