//! Application layer for grb-vote
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::VotingConfig;
pub use ports::{
    evaluation_logger::{EvaluationEvent, EvaluationLogger, NoEvaluationLogger},
    review_repository::{
        InMemoryReviewRepository, RepositoryError, ReviewRecord, ReviewSnapshotRepository,
    },
};
pub use use_cases::get_voting_status::{
    GetVotingStatusError, GetVotingStatusUseCase, VotingStatusOutput,
};
pub use use_cases::list_discussions::{ListDiscussionsError, ListDiscussionsUseCase};
