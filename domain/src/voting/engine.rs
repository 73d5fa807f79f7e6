//! Voting status engine
//!
//! Combines the review window, quorum, and objection tally into a single
//! [`VotingStatus`]. The decision table is evaluated top to bottom and the
//! first matching rule wins:
//!
//! ```text
//! ┌───┬──────────────────────────────────────────────────────┬──────────────┐
//! │ # │ Condition                                            │ Status       │
//! ├───┼──────────────────────────────────────────────────────┼──────────────┤
//! │ 1 │ no window, reviewers, start, or scheduled end        │ NotStarted   │
//! │ 3 │ manual end set, now > manual end, quorum not reached │ Inconclusive │
//! │ 4 │ start < now < scheduled end                          │ InProgress   │
//! │ 5 │ now > scheduled end, quorum not reached              │ InProgress   │
//! │ 6 │ 0 objections                                         │ Approved     │
//! │   │ 1 objection                                          │ Inconclusive │
//! │   │ 2+ objections                                        │ NotApproved  │
//! │ 7 │ fallback                                             │ NotStarted   │
//! └───┴──────────────────────────────────────────────────────┴──────────────┘
//! ```
//!
//! Rule 3 must stay ahead of rules 4 and 5: a manual close without quorum is
//! inconclusive even while the scheduled window is still open.

use super::quorum::{QuorumThreshold, quorum_reached};
use super::reviewer::Reviewer;
use super::status::VotingStatus;
use super::tally::count_objection;
use super::window::ReviewWindow;
use crate::core::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view over one review's scheduling data and reviewer list.
///
/// Built fresh for every status query; it never owns or mutates the records.
#[derive(Debug, Clone, Copy)]
pub struct VotingInformation<'a> {
    pub window: Option<&'a ReviewWindow>,
    pub reviewers: Option<&'a [Reviewer]>,
}

impl<'a> VotingInformation<'a> {
    pub fn new(window: Option<&'a ReviewWindow>, reviewers: Option<&'a [Reviewer]>) -> Self {
        Self { window, reviewers }
    }

    /// Both the window and the reviewer list are loaded
    pub fn loaded(window: &'a ReviewWindow, reviewers: &'a [Reviewer]) -> Self {
        Self::new(Some(window), Some(reviewers))
    }
}

/// Which row of the decision table produced a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Rule 1: scheduling data or reviewers missing
    MissingData,
    /// Rule 3: closed early without quorum
    ManualEndWithoutQuorum,
    /// Rule 4: inside the open window
    WithinWindow,
    /// Rule 5: window lapsed, still collecting votes for quorum
    AwaitingQuorum,
    /// Rule 6: concluded, decided by objections
    ObjectionTally,
    /// Rule 7: nothing matched
    Fallback,
}

/// A status together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDecision {
    pub status: VotingStatus,
    pub rule: DecisionRule,
}

impl StatusDecision {
    fn new(status: VotingStatus, rule: DecisionRule) -> Self {
        Self { status, rule }
    }
}

/// Pure decision function for GRB voting status.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use grb_domain::core::clock::FixedClock;
/// use grb_domain::voting::{
///     ReviewWindow, Reviewer, Vote, VotingInformation, VotingStatus, VotingStatusEngine,
/// };
///
/// let now = Utc::now();
/// let window = ReviewWindow::scheduled(now - Duration::days(2), now - Duration::days(1));
/// let reviewers: Vec<Reviewer> = (0..5)
///     .map(|i| Reviewer::voting(format!("r{i}")).with_vote(Vote::NoObjection))
///     .collect();
///
/// let engine = VotingStatusEngine::default();
/// let info = VotingInformation::loaded(&window, &reviewers);
/// let status = engine.status(&info, &FixedClock::new(now));
/// assert_eq!(status, VotingStatus::Approved);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VotingStatusEngine {
    threshold: QuorumThreshold,
}

impl VotingStatusEngine {
    pub fn new(threshold: QuorumThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> QuorumThreshold {
        self.threshold
    }

    /// Status as of the clock's current instant
    pub fn status(&self, info: &VotingInformation<'_>, clock: &dyn Clock) -> VotingStatus {
        self.status_at(info, clock.now())
    }

    /// Status as of `now`
    pub fn status_at(&self, info: &VotingInformation<'_>, now: DateTime<Utc>) -> VotingStatus {
        self.decide_at(info, now).status
    }

    /// Run the decision table at `now`, reporting which rule matched
    pub fn decide_at(&self, info: &VotingInformation<'_>, now: DateTime<Utc>) -> StatusDecision {
        // Rule 1
        let (Some(window), Some(reviewers)) = (info.window, info.reviewers) else {
            return StatusDecision::new(VotingStatus::NotStarted, DecisionRule::MissingData);
        };
        let (Some(started_at), Some(scheduled_end_at)) =
            (window.review_started_at, window.scheduled_end_at)
        else {
            return StatusDecision::new(VotingStatus::NotStarted, DecisionRule::MissingData);
        };

        // Rule 2
        let quorum = quorum_reached(reviewers, self.threshold);

        // Rule 3
        if let Some(manual_end_at) = window.manual_end_at
            && now > manual_end_at
            && !quorum
        {
            return StatusDecision::new(
                VotingStatus::Inconclusive,
                DecisionRule::ManualEndWithoutQuorum,
            );
        }

        // Rule 4
        if now > started_at && now < scheduled_end_at {
            return StatusDecision::new(VotingStatus::InProgress, DecisionRule::WithinWindow);
        }

        // Rule 5
        if now > scheduled_end_at && !quorum {
            return StatusDecision::new(VotingStatus::InProgress, DecisionRule::AwaitingQuorum);
        }

        // Rule 6
        match count_objection(reviewers) {
            0 => StatusDecision::new(VotingStatus::Approved, DecisionRule::ObjectionTally),
            1 => StatusDecision::new(VotingStatus::Inconclusive, DecisionRule::ObjectionTally),
            n if n >= 2 => {
                StatusDecision::new(VotingStatus::NotApproved, DecisionRule::ObjectionTally)
            }
            // Rule 7
            _ => StatusDecision::new(VotingStatus::NotStarted, DecisionRule::Fallback),
        }
    }
}
