//! Port for structured evaluation logging.
//!
//! Defines the [`EvaluationLogger`] trait for recording each computed voting
//! status and discussion listing to a structured audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per evaluation (JSONL).

use serde_json::Value;

/// A structured evaluation event for logging.
pub struct EvaluationEvent {
    /// Event type identifier (e.g., "voting_status_evaluated").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl EvaluationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging evaluation events.
///
/// `log` is synchronous and infallible; a failed write must never change the
/// result returned to the caller.
pub trait EvaluationLogger: Send + Sync {
    fn log(&self, event: EvaluationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEvaluationLogger;

impl EvaluationLogger for NoEvaluationLogger {
    fn log(&self, _event: EvaluationEvent) {}
}
