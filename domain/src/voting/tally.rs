//! Vote tallying restricted to eligible reviewers.
//!
//! Every count ignores reviewers whose role is not [`VotingRole::Voting`],
//! even when a vote happens to be recorded for them.
//!
//! [`VotingRole::Voting`]: super::reviewer::VotingRole::Voting

use super::reviewer::{Reviewer, Vote};
use serde::{Deserialize, Serialize};

fn eligible(reviewers: &[Reviewer]) -> impl Iterator<Item = &Reviewer> {
    reviewers.iter().filter(|r| r.counts_toward_tally())
}

/// Number of eligible reviewers who voted "no objection"
pub fn count_no_objection(reviewers: &[Reviewer]) -> usize {
    eligible(reviewers)
        .filter(|r| r.vote == Some(Vote::NoObjection))
        .count()
}

/// Number of eligible reviewers who voted "objection"
pub fn count_objection(reviewers: &[Reviewer]) -> usize {
    eligible(reviewers)
        .filter(|r| r.vote == Some(Vote::Objection))
        .count()
}

/// Number of eligible reviewers who cast any vote
pub fn count_voted(reviewers: &[Reviewer]) -> usize {
    eligible(reviewers).filter(|r| r.has_voted()).count()
}

/// Number of eligible reviewers still to vote
pub fn count_not_voted(reviewers: &[Reviewer]) -> usize {
    eligible(reviewers).filter(|r| !r.has_voted()).count()
}

/// All four counts for one reviewer list.
///
/// # Example
///
/// ```
/// use grb_domain::voting::{Reviewer, Vote, VoteTally, VotingRole};
///
/// let reviewers = vec![
///     Reviewer::voting("a").with_vote(Vote::NoObjection),
///     Reviewer::voting("b").with_vote(Vote::Objection),
///     Reviewer::voting("c"),
///     Reviewer::new("d", VotingRole::Alternate).with_vote(Vote::Objection),
/// ];
///
/// let tally = VoteTally::from_reviewers(&reviewers);
/// assert_eq!(tally.no_objection, 1);
/// assert_eq!(tally.objection, 1);
/// assert_eq!(tally.not_voted, 1);
/// assert_eq!(tally.voted(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub no_objection: usize,
    pub objection: usize,
    pub not_voted: usize,
}

impl VoteTally {
    pub fn from_reviewers(reviewers: &[Reviewer]) -> Self {
        Self {
            no_objection: count_no_objection(reviewers),
            objection: count_objection(reviewers),
            not_voted: count_not_voted(reviewers),
        }
    }

    pub fn voted(&self) -> usize {
        self.no_objection + self.objection
    }

    /// Eligible reviewers, voted or not
    pub fn eligible(&self) -> usize {
        self.voted() + self.not_voted
    }

    /// Visual summary, e.g. "[●●✕○]" (● no objection, ✕ objection, ○ pending)
    pub fn summary(&self) -> String {
        let mut summary = String::from("[");
        summary.extend(std::iter::repeat_n('●', self.no_objection));
        summary.extend(std::iter::repeat_n('✕', self.objection));
        summary.extend(std::iter::repeat_n('○', self.not_voted));
        summary.push(']');
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::reviewer::VotingRole;
    use proptest::prelude::*;

    fn mixed_panel() -> Vec<Reviewer> {
        vec![
            Reviewer::voting("v1").with_vote(Vote::NoObjection),
            Reviewer::voting("v2").with_vote(Vote::NoObjection),
            Reviewer::voting("v3").with_vote(Vote::Objection),
            Reviewer::voting("v4"),
            Reviewer::new("n1", VotingRole::NonVoting).with_vote(Vote::Objection),
            Reviewer::new("a1", VotingRole::Alternate).with_vote(Vote::NoObjection),
            Reviewer::new("a2", VotingRole::Alternate),
        ]
    }

    #[test]
    fn test_counts_on_mixed_panel() {
        let reviewers = mixed_panel();
        assert_eq!(count_no_objection(&reviewers), 2);
        assert_eq!(count_objection(&reviewers), 1);
        assert_eq!(count_voted(&reviewers), 3);
        assert_eq!(count_not_voted(&reviewers), 1);
    }

    #[test]
    fn test_empty_list_counts_zero() {
        let reviewers: Vec<Reviewer> = vec![];
        assert_eq!(count_no_objection(&reviewers), 0);
        assert_eq!(count_objection(&reviewers), 0);
        assert_eq!(count_voted(&reviewers), 0);
        assert_eq!(count_not_voted(&reviewers), 0);
        assert_eq!(VoteTally::from_reviewers(&reviewers), VoteTally::default());
    }

    #[test]
    fn test_tally_aggregate() {
        let tally = VoteTally::from_reviewers(&mixed_panel());
        assert_eq!(tally.voted(), 3);
        assert_eq!(tally.eligible(), 4);
        assert_eq!(tally.summary(), "[●●✕○]");
    }

    #[test]
    fn test_tally_serializes_camel_case() {
        let tally = VoteTally::from_reviewers(&mixed_panel());
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["noObjection"], 2);
        assert_eq!(json["notVoted"], 1);
    }

    fn arb_vote() -> impl Strategy<Value = Option<Vote>> {
        prop_oneof![
            Just(None),
            Just(Some(Vote::NoObjection)),
            Just(Some(Vote::Objection)),
        ]
    }

    fn arb_role() -> impl Strategy<Value = VotingRole> {
        prop_oneof![
            Just(VotingRole::Voting),
            Just(VotingRole::NonVoting),
            Just(VotingRole::Alternate),
        ]
    }

    fn arb_reviewers() -> impl Strategy<Value = Vec<Reviewer>> {
        proptest::collection::vec((arb_role(), arb_vote()), 0..20).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (role, vote))| Reviewer {
                    id: format!("r{i}").into(),
                    name: None,
                    voting_role: role,
                    vote,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_non_voting_roles_never_count(
            specs in proptest::collection::vec((any::<bool>(), arb_vote()), 0..20)
        ) {
            let reviewers: Vec<Reviewer> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (alternate, vote))| Reviewer {
                    id: format!("r{i}").into(),
                    name: None,
                    voting_role: if alternate {
                        VotingRole::Alternate
                    } else {
                        VotingRole::NonVoting
                    },
                    vote,
                })
                .collect();

            prop_assert_eq!(count_voted(&reviewers), 0);
            prop_assert_eq!(count_not_voted(&reviewers), 0);
            prop_assert_eq!(count_objection(&reviewers), 0);
            prop_assert_eq!(count_no_objection(&reviewers), 0);
        }

        #[test]
        fn prop_counts_partition_eligible_reviewers(reviewers in arb_reviewers()) {
            let eligible = reviewers.iter().filter(|r| r.voting_role == VotingRole::Voting).count();
            prop_assert_eq!(count_voted(&reviewers) + count_not_voted(&reviewers), eligible);
            prop_assert_eq!(
                count_no_objection(&reviewers) + count_objection(&reviewers),
                count_voted(&reviewers)
            );
        }

        #[test]
        fn prop_adding_cast_vote_never_decreases_voted(
            reviewers in arb_reviewers(),
            objection in any::<bool>()
        ) {
            let before = count_voted(&reviewers);
            let mut extended = reviewers.clone();
            let vote = if objection { Vote::Objection } else { Vote::NoObjection };
            extended.push(Reviewer::voting("extra").with_vote(vote));
            prop_assert_eq!(count_voted(&extended), before + 1);
        }
    }
}
