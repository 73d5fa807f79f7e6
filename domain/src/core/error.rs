//! Domain error types

use crate::core::ids::PostId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quorum threshold: {0} (must be at least 1)")]
    InvalidQuorumThreshold(usize),
}

/// Data-integrity fault raised while rebuilding discussion threads.
///
/// These are never recovered from inside the domain: a malformed post set
/// means the snapshot handed to us is corrupt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThreadingIntegrityError {
    #[error("Discussion has no initial post")]
    NoInitialPost,

    #[error("Discussion has {count} initial posts, expected exactly one")]
    MultipleInitialPosts { count: usize },

    #[error("Reply {post_id} references unknown initial post {reply_to_id}")]
    OrphanReply { post_id: PostId, reply_to_id: PostId },
}

impl ThreadingIntegrityError {
    /// Check if this error was caused by a reply pointing at nothing
    pub fn is_orphan_reply(&self) -> bool {
        matches!(self, ThreadingIntegrityError::OrphanReply { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_display() {
        let error = DomainError::InvalidQuorumThreshold(0);
        assert_eq!(
            error.to_string(),
            "Invalid quorum threshold: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_threading_error_display() {
        let error = ThreadingIntegrityError::MultipleInitialPosts { count: 2 };
        assert_eq!(
            error.to_string(),
            "Discussion has 2 initial posts, expected exactly one"
        );

        let orphan = ThreadingIntegrityError::OrphanReply {
            post_id: PostId::new("r1"),
            reply_to_id: PostId::new("missing"),
        };
        assert_eq!(
            orphan.to_string(),
            "Reply r1 references unknown initial post missing"
        );
    }

    #[test]
    fn test_is_orphan_reply_check() {
        assert!(
            ThreadingIntegrityError::OrphanReply {
                post_id: PostId::new("a"),
                reply_to_id: PostId::new("b"),
            }
            .is_orphan_reply()
        );
        assert!(!ThreadingIntegrityError::NoInitialPost.is_orphan_reply());
    }
}
