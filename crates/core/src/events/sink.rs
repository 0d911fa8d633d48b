//! Event sink trait and test implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receives domain events after a mutation has been committed.
///
/// The realtime adapter implements this to fan events out to connected
/// group members; emission is best-effort and must stay cheap. A sink that
/// needs to do real work (network, disk) should queue the event and return
/// immediately - a dropped event must never roll back the mutation that
/// produced it.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Emits several events from one mutation. Falls back to repeated
    /// `emit()` calls; batch-aware sinks may override.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink that drops every event, for wiring that doesn't need fan-out.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Test sink that records everything it receives.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Badge ids from every `BadgeAwarded` event seen so far.
    pub fn badge_awards(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                DomainEvent::BadgeAwarded { badge_id, .. } => Some(badge_id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventSink for MockEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}
