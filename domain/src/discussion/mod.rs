//! Reviewer discussion threads
//!
//! Discussion posts are stored flat. [`threading`] turns them back into
//! [`Discussion`]s: one initial post with its replies.

pub mod post;
pub mod threading;

pub use post::{Discussion, DiscussionPost};
pub use threading::{build_all_discussions, build_discussion};
