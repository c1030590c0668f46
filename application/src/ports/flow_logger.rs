//! Port for structured flow transcript logging.
//!
//! Defines the [`FlowLogger`] trait for recording flow events (start,
//! completed steps, failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! prompt/response transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured flow event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the writer.
pub struct FlowEvent {
    /// Event type identifier (e.g., "flow_started", "flow_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl FlowEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging flow events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible: a logging failure must
/// never fail the flow.
pub trait FlowLogger: Send + Sync {
    /// Record a flow event.
    fn log(&self, event: FlowEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoFlowLogger;

impl FlowLogger for NoFlowLogger {
    fn log(&self, _event: FlowEvent) {}
}
