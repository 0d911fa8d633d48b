//! Domain events module.
//!
//! Provides domain event types and the sink trait for publishing events
//! after successful domain mutations. Runtime adapters (HTTP/realtime)
//! implement the sink to fan events out to connected clients.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
