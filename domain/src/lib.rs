//! Domain layer for grb-vote
//!
//! This crate contains the core business logic of the Governance Review
//! Board (GRB) asynchronous vote. It has no dependencies on persistence,
//! transport, or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Voting
//!
//! - **Tally**: counts votes cast by reviewers holding the `Voting` role
//! - **Quorum**: a decision needs at least 5 eligible votes by default
//! - **Status**: a decision table over the review window, quorum, and tally
//!
//! ## Discussions
//!
//! Reviewers discuss a request in flat posts; threads are rebuilt from
//! `replyToID` links, one level deep.

pub mod core;
pub mod discussion;
pub mod voting;

// Re-export commonly used types
pub use core::{
    clock::{Clock, FixedClock},
    error::{DomainError, ThreadingIntegrityError},
    ids::{PostId, ReviewId, ReviewerId},
};
pub use discussion::{Discussion, DiscussionPost, build_all_discussions, build_discussion};
pub use voting::{
    DecisionRule, QuorumThreshold, ReviewWindow, Reviewer, StatusDecision, Vote, VoteTally,
    VotingInformation, VotingRole, VotingStatus, VotingStatusEngine, quorum_reached,
};
