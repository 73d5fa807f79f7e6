//! Application-level configuration.
//!
//! - [`VotingConfig`] - quorum threshold injected into the status engine

pub mod voting_config;

pub use voting_config::VotingConfig;
