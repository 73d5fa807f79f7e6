//! Get Voting Status use case
//!
//! Loads a review's window and reviewers, then runs the domain status engine
//! against the injected clock.

use crate::config::VotingConfig;
use crate::ports::evaluation_logger::{EvaluationEvent, EvaluationLogger, NoEvaluationLogger};
use crate::ports::review_repository::{RepositoryError, ReviewSnapshotRepository};
use chrono::{DateTime, Utc};
use grb_domain::{
    Clock, DecisionRule, QuorumThreshold, ReviewId, VoteTally, VotingInformation, VotingStatus,
    VotingStatusEngine, quorum_reached,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while computing a voting status
#[derive(Error, Debug)]
pub enum GetVotingStatusError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result of one status evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingStatusOutput {
    pub review_id: ReviewId,
    pub status: VotingStatus,
    /// Decision-table row that produced `status`
    pub rule: DecisionRule,
    pub tally: VoteTally,
    pub quorum_reached: bool,
    pub quorum_threshold: QuorumThreshold,
    pub evaluated_at: DateTime<Utc>,
}

impl VotingStatusOutput {
    /// Eligible votes still needed for quorum
    pub fn votes_remaining(&self) -> usize {
        self.quorum_threshold.votes_remaining(self.tally.voted())
    }
}

/// Use case for computing a review's voting status
pub struct GetVotingStatusUseCase<R: ReviewSnapshotRepository + 'static> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    engine: VotingStatusEngine,
    logger: Arc<dyn EvaluationLogger>,
}

impl<R: ReviewSnapshotRepository + 'static> GetVotingStatusUseCase<R> {
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, config: VotingConfig) -> Self {
        Self {
            repository,
            clock,
            engine: config.engine(),
            logger: Arc::new(NoEvaluationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn EvaluationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case for one review
    pub async fn execute(
        &self,
        review_id: &ReviewId,
    ) -> Result<VotingStatusOutput, GetVotingStatusError> {
        info!("Evaluating voting status for review {}", review_id);

        let window = self.repository.review_window(review_id).await?;
        let reviewers = self.repository.reviewers(review_id).await?;

        if window.is_none() {
            debug!("Review {} has no scheduling record", review_id);
        }

        let now = self.clock.now();
        let info = VotingInformation::new(window.as_ref(), reviewers.as_deref());
        let decision = self.engine.decide_at(&info, now);

        let reviewers = reviewers.unwrap_or_default();
        let threshold = self.engine.threshold();
        let output = VotingStatusOutput {
            review_id: review_id.clone(),
            status: decision.status,
            rule: decision.rule,
            tally: VoteTally::from_reviewers(&reviewers),
            quorum_reached: quorum_reached(&reviewers, threshold),
            quorum_threshold: threshold,
            evaluated_at: now,
        };

        debug!(
            "Review {}: {} via {:?} ({} of {} votes, tally {})",
            review_id,
            output.status,
            output.rule,
            output.tally.voted(),
            threshold.get(),
            output.tally.summary()
        );

        self.logger.log(EvaluationEvent::new(
            "voting_status_evaluated",
            serde_json::json!({
                "review_id": review_id.as_str(),
                "status": output.status,
                "rule": output.rule,
                "no_objection": output.tally.no_objection,
                "objection": output.tally.objection,
                "not_voted": output.tally.not_voted,
                "quorum_reached": output.quorum_reached,
                "quorum_threshold": threshold.get(),
                "evaluated_at": now.to_rfc3339(),
            }),
        ));

        Ok(output)
    }
}
