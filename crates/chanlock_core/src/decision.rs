//! Outcome of running a post through the guard.

use crate::Post;

/// What the host should do with a submitted post.
///
/// # Examples
///
/// ```
/// use chanlock_core::{Post, PostDecision};
///
/// let decision = PostDecision::Discard { restricted: "announcements".into() };
/// let (post, signal) = decision.into_host_reply();
/// assert!(post.is_none());
/// assert_eq!(signal, "announcements");
///
/// let post = Post::new("c", "u", "hi");
/// let (kept, signal) = PostDecision::Allow(post.clone()).into_host_reply();
/// assert_eq!(kept, Some(post));
/// assert!(signal.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PostDecision {
    /// Persist the post unchanged.
    #[display("allow")]
    Allow(Post),
    /// Drop the post. `restricted` is the auxiliary signal handed to the host:
    /// the configured restricted-name string, or empty when the block came
    /// from an unverifiable membership.
    #[display("discard")]
    Discard {
        /// Auxiliary signal for the host
        restricted: String,
    },
}

impl PostDecision {
    /// Whether the post survives.
    pub fn is_allowed(&self) -> bool {
        matches!(self, PostDecision::Allow(_))
    }

    /// The post to persist, if any.
    pub fn post(&self) -> Option<&Post> {
        match self {
            PostDecision::Allow(post) => Some(post),
            PostDecision::Discard { .. } => None,
        }
    }

    /// Auxiliary signal; empty for allowed posts.
    pub fn signal(&self) -> &str {
        match self {
            PostDecision::Allow(_) => "",
            PostDecision::Discard { restricted } => restricted,
        }
    }

    /// Convert into the host's `(post to persist, auxiliary signal)` reply.
    pub fn into_host_reply(self) -> (Option<Post>, String) {
        match self {
            PostDecision::Allow(post) => (Some(post), String::new()),
            PostDecision::Discard { restricted } => (None, restricted),
        }
    }
}
