//! Quorum evaluation for GRB votes
//!
//! A decision can only be produced once enough eligible reviewers have voted.

use super::reviewer::Reviewer;
use super::tally::count_voted;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum number of eligible cast votes required for a decision.
///
/// Always at least 1, so an empty reviewer list can never reach quorum.
///
/// # Example
///
/// ```
/// use grb_domain::voting::QuorumThreshold;
///
/// let threshold = QuorumThreshold::default();
/// assert_eq!(threshold.get(), 5);
/// assert!(threshold.is_met_by(5));
/// assert!(!threshold.is_met_by(4));
/// assert_eq!(threshold.votes_remaining(3), 2);
///
/// assert!(QuorumThreshold::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct QuorumThreshold(usize);

impl QuorumThreshold {
    pub const DEFAULT: usize = 5;

    pub fn new(votes: usize) -> Result<Self, DomainError> {
        if votes == 0 {
            return Err(DomainError::InvalidQuorumThreshold(votes));
        }
        Ok(Self(votes))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn is_met_by(&self, voted: usize) -> bool {
        voted >= self.0
    }

    /// Eligible votes still needed before quorum
    pub fn votes_remaining(&self, voted: usize) -> usize {
        self.0.saturating_sub(voted)
    }
}

impl Default for QuorumThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<usize> for QuorumThreshold {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuorumThreshold> for usize {
    fn from(value: QuorumThreshold) -> Self {
        value.0
    }
}

impl std::fmt::Display for QuorumThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} votes", self.0)
    }
}

/// Whether enough eligible reviewers have voted
pub fn quorum_reached(reviewers: &[Reviewer], threshold: QuorumThreshold) -> bool {
    threshold.is_met_by(count_voted(reviewers))
}
