//! Reviewer and vote primitives for GRB asynchronous voting.

use crate::core::ids::ReviewerId;
use serde::{Deserialize, Serialize};

/// Voting eligibility of a reviewer assigned to a review.
///
/// Only [`VotingRole::Voting`] reviewers count toward tallies and quorum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotingRole {
    Voting,
    NonVoting,
    Alternate,
}

impl VotingRole {
    /// Whether a reviewer with this role is eligible to be counted
    pub fn is_eligible(&self) -> bool {
        matches!(self, VotingRole::Voting)
    }
}

impl std::fmt::Display for VotingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VotingRole::Voting => write!(f, "Voting"),
            VotingRole::NonVoting => write!(f, "Non-voting"),
            VotingRole::Alternate => write!(f, "Alternate"),
        }
    }
}

/// A vote cast by a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vote {
    NoObjection,
    Objection,
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vote::NoObjection => write!(f, "No objection"),
            Vote::Objection => write!(f, "Objection"),
        }
    }
}

/// A reviewer assigned to a GRB review, with their current vote (if any).
///
/// This layer only reads reviewers; a recorded vote is never changed here.
///
/// # Example
///
/// ```
/// use grb_domain::voting::{Reviewer, Vote, VotingRole};
///
/// let reviewer = Reviewer::voting("r1").with_vote(Vote::NoObjection);
/// assert!(reviewer.counts_toward_tally());
/// assert!(reviewer.has_voted());
///
/// let alternate = Reviewer::new("r2", VotingRole::Alternate).with_vote(Vote::Objection);
/// assert!(!alternate.counts_toward_tally());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: ReviewerId,
    /// Display name, not used by any computation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub voting_role: VotingRole,
    #[serde(default)]
    pub vote: Option<Vote>,
}

impl Reviewer {
    pub fn new(id: impl Into<ReviewerId>, voting_role: VotingRole) -> Self {
        Self {
            id: id.into(),
            name: None,
            voting_role,
            vote: None,
        }
    }

    /// Create a reviewer with the [`VotingRole::Voting`] role
    pub fn voting(id: impl Into<ReviewerId>) -> Self {
        Self::new(id, VotingRole::Voting)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_vote(mut self, vote: Vote) -> Self {
        self.vote = Some(vote);
        self
    }

    pub fn has_voted(&self) -> bool {
        self.vote.is_some()
    }

    /// Eligibility is decided by the role held now, not the role held when
    /// the vote was cast.
    pub fn counts_toward_tally(&self) -> bool {
        self.voting_role.is_eligible()
    }

    /// Name if known, otherwise the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_eligibility() {
        assert!(VotingRole::Voting.is_eligible());
        assert!(!VotingRole::NonVoting.is_eligible());
        assert!(!VotingRole::Alternate.is_eligible());
    }

    #[test]
    fn test_reviewer_builder() {
        let reviewer = Reviewer::voting("r1")
            .with_name("Ada")
            .with_vote(Vote::Objection);
        assert_eq!(reviewer.display_name(), "Ada");
        assert_eq!(reviewer.vote, Some(Vote::Objection));
        assert!(reviewer.has_voted());

        let unnamed = Reviewer::new("r2", VotingRole::NonVoting);
        assert_eq!(unnamed.display_name(), "r2");
        assert!(!unnamed.has_voted());
    }

    #[test]
    fn test_reviewer_deserialize_wire_names() {
        let json = r#"{"id":"r1","votingRole":"NON_VOTING","vote":"NO_OBJECTION"}"#;
        let reviewer: Reviewer = serde_json::from_str(json).unwrap();
        assert_eq!(reviewer.voting_role, VotingRole::NonVoting);
        assert_eq!(reviewer.vote, Some(Vote::NoObjection));
        assert!(reviewer.name.is_none());
    }

    #[test]
    fn test_reviewer_missing_vote_defaults_to_none() {
        let json = r#"{"id":"r1","votingRole":"VOTING"}"#;
        let reviewer: Reviewer = serde_json::from_str(json).unwrap();
        assert!(reviewer.vote.is_none());
    }
}
