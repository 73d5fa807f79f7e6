//! Discussion post entities

use crate::core::ids::PostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single reviewer discussion post, as stored (flat, unthreaded).
///
/// A post without `reply_to_id` starts a new thread. A reply always points
/// at an initial post; replies to replies are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionPost {
    pub id: PostId,
    #[serde(rename = "replyToID", default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<PostId>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl DiscussionPost {
    /// Create a post that starts a thread
    pub fn initial(id: impl Into<PostId>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            reply_to_id: None,
            created_at,
            author: None,
            content: String::new(),
        }
    }

    /// Create a reply to the initial post `reply_to`
    pub fn reply(
        id: impl Into<PostId>,
        reply_to: impl Into<PostId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            reply_to_id: Some(reply_to.into()),
            ..Self::initial(id, created_at)
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn is_initial(&self) -> bool {
        self.reply_to_id.is_none()
    }
}

/// A reconstructed thread: one initial post and its replies, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub initial_post: DiscussionPost,
    pub replies: Vec<DiscussionPost>,
}

impl Discussion {
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// Time of the most recent post in the thread
    pub fn last_activity_at(&self) -> DateTime<Utc> {
        self.replies
            .last()
            .map_or(self.initial_post.created_at, |r| r.created_at)
            .max(self.initial_post.created_at)
    }
}
