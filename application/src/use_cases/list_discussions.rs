//! List Discussions use case
//!
//! Loads the flat post list for a review and rebuilds its threads.

use crate::ports::evaluation_logger::{EvaluationEvent, EvaluationLogger, NoEvaluationLogger};
use crate::ports::review_repository::{RepositoryError, ReviewSnapshotRepository};
use grb_domain::{Discussion, ReviewId, ThreadingIntegrityError, build_all_discussions};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while listing discussions
#[derive(Error, Debug)]
pub enum ListDiscussionsError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Threading integrity error: {0}")]
    Threading(#[from] ThreadingIntegrityError),
}

/// Use case for listing a review's discussion threads, newest first
pub struct ListDiscussionsUseCase<R: ReviewSnapshotRepository + 'static> {
    repository: Arc<R>,
    logger: Arc<dyn EvaluationLogger>,
}

impl<R: ReviewSnapshotRepository + 'static> ListDiscussionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            logger: Arc::new(NoEvaluationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn EvaluationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(
        &self,
        review_id: &ReviewId,
    ) -> Result<Vec<Discussion>, ListDiscussionsError> {
        let posts = self.repository.discussion_posts(review_id).await?;
        let post_count = posts.len();

        let discussions = build_all_discussions(posts).inspect_err(|e| {
            warn!("Discussion data for review {} is corrupt: {}", review_id, e);
        })?;

        info!(
            "Review {}: {} posts in {} discussions",
            review_id,
            post_count,
            discussions.len()
        );

        self.logger.log(EvaluationEvent::new(
            "discussions_listed",
            serde_json::json!({
                "review_id": review_id.as_str(),
                "posts": post_count,
                "discussions": discussions.len(),
            }),
        ));

        Ok(discussions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::review_repository::{InMemoryReviewRepository, ReviewRecord};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use grb_domain::DiscussionPost;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 14, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn repo_with_posts(posts: Vec<DiscussionPost>) -> Arc<InMemoryReviewRepository> {
        Arc::new(InMemoryReviewRepository::new().with_review(
            "rev-1",
            ReviewRecord {
                posts,
                ..ReviewRecord::default()
            },
        ))
    }

    #[tokio::test]
    async fn test_lists_threads_newest_first() {
        let repo = repo_with_posts(vec![
            DiscussionPost::initial("old", at(0)),
            DiscussionPost::reply("old-1", "old", at(40)),
            DiscussionPost::initial("new", at(30)),
        ]);

        let discussions = ListDiscussionsUseCase::new(repo)
            .execute(&ReviewId::new("rev-1"))
            .await
            .unwrap();

        assert_eq!(discussions.len(), 2);
        assert_eq!(discussions[0].initial_post.id.as_str(), "new");
        assert_eq!(discussions[1].replies[0].id.as_str(), "old-1");
    }

    #[tokio::test]
    async fn test_unknown_review_has_no_discussions() {
        let discussions = ListDiscussionsUseCase::new(repo_with_posts(vec![]))
            .execute(&ReviewId::new("other"))
            .await
            .unwrap();
        assert!(discussions.is_empty());
    }

    #[tokio::test]
    async fn test_orphan_reply_propagates() {
        let repo = repo_with_posts(vec![
            DiscussionPost::initial("p1", at(0)),
            DiscussionPost::reply("r1", "deleted", at(1)),
        ]);

        let err = ListDiscussionsUseCase::new(repo)
            .execute(&ReviewId::new("rev-1"))
            .await
            .unwrap_err();

        match err {
            ListDiscussionsError::Threading(inner) => assert!(inner.is_orphan_reply()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
