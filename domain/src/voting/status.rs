//! Aggregate voting status of a GRB review.

use serde::{Deserialize, Serialize};

/// Classification of a review's asynchronous vote.
///
/// Serialized with the API wire names (`NOT_STARTED`, `IN_PROGRESS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotingStatus {
    /// Voting has not opened (or the review is missing scheduling data)
    NotStarted,
    /// Votes are still being accepted
    InProgress,
    /// Concluded with quorum and no objections
    Approved,
    /// Concluded with quorum and two or more objections
    NotApproved,
    /// Concluded with a single objection, or closed early without quorum
    Inconclusive,
}

impl VotingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VotingStatus::NotStarted => "NOT_STARTED",
            VotingStatus::InProgress => "IN_PROGRESS",
            VotingStatus::Approved => "APPROVED",
            VotingStatus::NotApproved => "NOT_APPROVED",
            VotingStatus::Inconclusive => "INCONCLUSIVE",
        }
    }

    /// Whether voting is over and the outcome is final
    pub fn is_concluded(&self) -> bool {
        matches!(
            self,
            VotingStatus::Approved | VotingStatus::NotApproved | VotingStatus::Inconclusive
        )
    }
}

impl std::fmt::Display for VotingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VotingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOT_STARTED" => Ok(VotingStatus::NotStarted),
            "IN_PROGRESS" => Ok(VotingStatus::InProgress),
            "APPROVED" => Ok(VotingStatus::Approved),
            "NOT_APPROVED" => Ok(VotingStatus::NotApproved),
            "INCONCLUSIVE" => Ok(VotingStatus::Inconclusive),
            _ => Err(format!("Unknown voting status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&VotingStatus::NotApproved).unwrap(),
            "\"NOT_APPROVED\""
        );
        assert_eq!(VotingStatus::InProgress.to_string(), "IN_PROGRESS");
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            "inconclusive".parse::<VotingStatus>().ok(),
            Some(VotingStatus::Inconclusive)
        );
        assert!("DONE".parse::<VotingStatus>().is_err());
    }

    #[test]
    fn test_is_concluded() {
        assert!(!VotingStatus::NotStarted.is_concluded());
        assert!(!VotingStatus::InProgress.is_concluded());
        assert!(VotingStatus::Approved.is_concluded());
        assert!(VotingStatus::NotApproved.is_concluded());
        assert!(VotingStatus::Inconclusive.is_concluded());
    }
}
