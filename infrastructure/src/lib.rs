//! Infrastructure layer for grb-vote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileVotingConfig, Severity,
};
pub use logging::JsonlEvaluationLogger;
pub use snapshot::{JsonSnapshotRepository, SnapshotError};
