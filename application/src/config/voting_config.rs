//! Voting parameters - status evaluation control.
//!
//! [`VotingConfig`] holds the values the status use case injects into the
//! domain engine instead of reading them from global state.

use grb_domain::{QuorumThreshold, VotingStatusEngine};
use serde::{Deserialize, Serialize};

/// Voting evaluation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Minimum eligible votes needed before a review can conclude.
    pub quorum_threshold: QuorumThreshold,
}

impl VotingConfig {
    pub fn with_quorum_threshold(mut self, threshold: QuorumThreshold) -> Self {
        self.quorum_threshold = threshold;
        self
    }

    /// Build the status engine for these parameters.
    pub fn engine(&self) -> VotingStatusEngine {
        VotingStatusEngine::new(self.quorum_threshold)
    }
}
