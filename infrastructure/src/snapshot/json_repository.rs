//! JSON snapshot adapter for the review repository port.
//!
//! A snapshot is a point-in-time export of the records the voting engine
//! reads. The whole file is loaded once, so every query against one
//! repository sees the same consistent data.
//!
//! ```json
//! {
//!   "reviews": [
//!     {
//!       "id": "intake-42",
//!       "window": { "reviewStartedAt": "...", "scheduledEndAt": "...", "manualEndAt": null },
//!       "reviewers": [ { "id": "r1", "votingRole": "VOTING", "vote": "NO_OBJECTION" } ],
//!       "posts": [ { "id": "p1", "createdAt": "...", "content": "..." } ]
//!     }
//!   ]
//! }
//! ```

use async_trait::async_trait;
use grb_application::{RepositoryError, ReviewSnapshotRepository};
use grb_domain::{DiscussionPost, ReviewId, ReviewWindow, Reviewer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading a snapshot file
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Could not read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Review {0} appears more than once in the snapshot")]
    DuplicateReview(ReviewId),
}

impl From<SnapshotError> for RepositoryError {
    fn from(value: SnapshotError) -> Self {
        match value {
            SnapshotError::Read { .. } => RepositoryError::Io(value.to_string()),
            SnapshotError::Parse(_) | SnapshotError::DuplicateReview(_) => {
                RepositoryError::Malformed(value.to_string())
            }
        }
    }
}

/// One review as it appears in the snapshot file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotReview {
    pub id: ReviewId,
    #[serde(default)]
    pub window: Option<ReviewWindow>,
    #[serde(default)]
    pub reviewers: Option<Vec<Reviewer>>,
    #[serde(default)]
    pub posts: Vec<DiscussionPost>,
}

/// Snapshot file document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub reviews: Vec<SnapshotReview>,
}

/// Review repository backed by a JSON snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    reviews: HashMap<ReviewId, SnapshotReview>,
}

impl JsonSnapshotRepository {
    /// Read and index a snapshot file
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SnapshotError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let repository = Self::from_json(&raw)?;
        info!(
            "Loaded snapshot {} ({} reviews)",
            path.display(),
            repository.len()
        );
        Ok(repository)
    }

    /// Index an in-memory snapshot document
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    pub fn from_document(document: SnapshotDocument) -> Result<Self, SnapshotError> {
        let mut reviews = HashMap::with_capacity(document.reviews.len());
        for review in document.reviews {
            if reviews.contains_key(&review.id) {
                return Err(SnapshotError::DuplicateReview(review.id));
            }
            reviews.insert(review.id.clone(), review);
        }
        Ok(Self { reviews })
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Review ids in the snapshot, sorted
    pub fn review_ids(&self) -> Vec<&ReviewId> {
        let mut ids: Vec<_> = self.reviews.keys().collect();
        ids.sort();
        ids
    }

    fn get(&self, id: &ReviewId) -> Option<&SnapshotReview> {
        let review = self.reviews.get(id);
        if review.is_none() {
            debug!("Review {} not present in snapshot", id);
        }
        review
    }
}

#[async_trait]
impl ReviewSnapshotRepository for JsonSnapshotRepository {
    async fn review_window(&self, id: &ReviewId) -> Result<Option<ReviewWindow>, RepositoryError> {
        Ok(self.get(id).and_then(|r| r.window))
    }

    async fn reviewers(&self, id: &ReviewId) -> Result<Option<Vec<Reviewer>>, RepositoryError> {
        Ok(self.get(id).and_then(|r| r.reviewers.clone()))
    }

    async fn discussion_posts(
        &self,
        id: &ReviewId,
    ) -> Result<Vec<DiscussionPost>, RepositoryError> {
        Ok(self.get(id).map(|r| r.posts.clone()).unwrap_or_default())
    }
}
