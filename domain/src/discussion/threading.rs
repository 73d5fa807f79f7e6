//! Thread reconstruction for discussion posts
//!
//! Posts arrive flat and in no particular order. Threads are rebuilt in two
//! passes: partition into initial posts and replies, then join each reply to
//! its initial post by id. Only one level of nesting exists, so no graph walk
//! is needed.

use super::post::{Discussion, DiscussionPost};
use crate::core::error::ThreadingIntegrityError;
use crate::core::ids::PostId;
use std::collections::HashMap;

/// Build one discussion from posts believed to form a single thread.
///
/// Exactly one post must lack a `reply_to_id`; the rest are replies, sorted
/// oldest first.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use grb_domain::discussion::{DiscussionPost, build_discussion};
///
/// let t0 = Utc::now();
/// let posts = vec![
///     DiscussionPost::reply("r2", "p1", t0 + Duration::minutes(9)),
///     DiscussionPost::initial("p1", t0),
///     DiscussionPost::reply("r1", "p1", t0 + Duration::minutes(2)),
/// ];
///
/// let discussion = build_discussion(posts).unwrap();
/// assert_eq!(discussion.initial_post.id.as_str(), "p1");
/// let replies: Vec<_> = discussion.replies.iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(replies, ["r1", "r2"]);
/// ```
pub fn build_discussion(
    posts: Vec<DiscussionPost>,
) -> Result<Discussion, ThreadingIntegrityError> {
    let (mut initial, mut replies): (Vec<_>, Vec<_>) =
        posts.into_iter().partition(DiscussionPost::is_initial);

    let initial_post = match initial.len() {
        0 => return Err(ThreadingIntegrityError::NoInitialPost),
        1 => initial.remove(0),
        count => return Err(ThreadingIntegrityError::MultipleInitialPosts { count }),
    };

    replies.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(Discussion {
        initial_post,
        replies,
    })
}

/// Rebuild every thread in a flat post list, newest thread first.
///
/// Fails without partial output if any reply points at a post that is not an
/// initial post in the same input.
pub fn build_all_discussions(
    posts: Vec<DiscussionPost>,
) -> Result<Vec<Discussion>, ThreadingIntegrityError> {
    let (initial, replies): (Vec<_>, Vec<_>) =
        posts.into_iter().partition(DiscussionPost::is_initial);

    // Pass 1: one group per initial post id. A duplicated id lands two
    // initial posts in one group and is rejected by build_discussion.
    let mut groups: HashMap<PostId, Vec<DiscussionPost>> = HashMap::with_capacity(initial.len());
    for post in initial {
        groups.entry(post.id.clone()).or_default().push(post);
    }

    // Lowest id first so the reported orphan does not depend on input order
    if let Some(orphan) = replies
        .iter()
        .filter(|r| !r.reply_to_id.as_ref().is_some_and(|id| groups.contains_key(id)))
        .min_by(|a, b| a.id.cmp(&b.id))
    {
        return Err(ThreadingIntegrityError::OrphanReply {
            post_id: orphan.id.clone(),
            reply_to_id: orphan.reply_to_id.clone().unwrap_or_else(|| orphan.id.clone()),
        });
    }

    // Pass 2: join replies to their thread
    for reply in replies {
        if let Some(group) = reply.reply_to_id.as_ref().and_then(|id| groups.get_mut(id)) {
            group.push(reply);
        }
    }

    let mut discussions = groups
        .into_values()
        .map(build_discussion)
        .collect::<Result<Vec<_>, _>>()?;

    discussions.sort_by(|a, b| {
        b.initial_post
            .created_at
            .cmp(&a.initial_post.created_at)
            .then_with(|| a.initial_post.id.cmp(&b.initial_post.id))
    });

    Ok(discussions)
}
