//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod get_voting_status;
pub mod list_discussions;
