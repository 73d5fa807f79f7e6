//! Structured evaluation logging.
//!
//! Provides [`JsonlEvaluationLogger`], a JSONL file writer that implements
//! the [`EvaluationLogger`](grb_application::EvaluationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEvaluationLogger;
