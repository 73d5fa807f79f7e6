//! GRB asynchronous voting
//!
//! Everything here is a pure function over already-loaded data:
//!
//! - [`tally`] - role-filtered vote counts
//! - [`quorum`] - whether enough eligible votes have been cast
//! - [`engine`] - the status decision table
//!
//! ```text
//! ReviewWindow ──┐
//!                ├─► VotingInformation ─► VotingStatusEngine ─► VotingStatus
//! [Reviewer] ────┘                          │        │
//!                                           ▼        ▼
//!                                  quorum_reached  count_objection
//! ```

pub mod engine;
pub mod quorum;
pub mod reviewer;
pub mod status;
pub mod tally;
pub mod window;

pub use engine::{DecisionRule, StatusDecision, VotingInformation, VotingStatusEngine};
pub use quorum::{QuorumThreshold, quorum_reached};
pub use reviewer::{Reviewer, Vote, VotingRole};
pub use status::VotingStatus;
pub use tally::{
    VoteTally, count_no_objection, count_not_voted, count_objection, count_voted,
};
pub use window::ReviewWindow;
