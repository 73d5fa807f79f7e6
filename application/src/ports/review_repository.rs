//! Review snapshot repository port
//!
//! Defines how the application layer loads the already-persisted records a
//! status query or discussion listing needs. Implementations (adapters) live
//! in the infrastructure layer; this layer never issues queries itself.

use async_trait::async_trait;
use grb_domain::{DiscussionPost, ReviewId, ReviewWindow, Reviewer};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while loading review data
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to review records.
///
/// A review that does not exist is not an error: `review_window` and
/// `reviewers` return `None`, and `discussion_posts` returns an empty list.
#[async_trait]
pub trait ReviewSnapshotRepository: Send + Sync {
    /// Scheduling fields of the review's parent record
    async fn review_window(&self, id: &ReviewId) -> Result<Option<ReviewWindow>, RepositoryError>;

    /// Every reviewer assigned to the review, whatever their role
    async fn reviewers(&self, id: &ReviewId) -> Result<Option<Vec<Reviewer>>, RepositoryError>;

    /// Flat, unordered discussion posts for the review
    async fn discussion_posts(&self, id: &ReviewId)
    -> Result<Vec<DiscussionPost>, RepositoryError>;
}

/// One review's records held in memory
#[derive(Debug, Clone, Default)]
pub struct ReviewRecord {
    pub window: Option<ReviewWindow>,
    pub reviewers: Option<Vec<Reviewer>>,
    pub posts: Vec<DiscussionPost>,
}

/// In-memory repository for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: HashMap<ReviewId, ReviewRecord>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_review(mut self, id: impl Into<ReviewId>, record: ReviewRecord) -> Self {
        self.reviews.insert(id.into(), record);
        self
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[async_trait]
impl ReviewSnapshotRepository for InMemoryReviewRepository {
    async fn review_window(&self, id: &ReviewId) -> Result<Option<ReviewWindow>, RepositoryError> {
        Ok(self.reviews.get(id).and_then(|r| r.window))
    }

    async fn reviewers(&self, id: &ReviewId) -> Result<Option<Vec<Reviewer>>, RepositoryError> {
        Ok(self.reviews.get(id).and_then(|r| r.reviewers.clone()))
    }

    async fn discussion_posts(
        &self,
        id: &ReviewId,
    ) -> Result<Vec<DiscussionPost>, RepositoryError> {
        Ok(self
            .reviews
            .get(id)
            .map(|r| r.posts.clone())
            .unwrap_or_default())
    }
}
