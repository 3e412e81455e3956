//! Host entities observed by the guard.
//!
//! The guard never creates or mutates these; they arrive from the host's
//! plugin API and are only read.

use serde::{Deserialize, Serialize};

/// Role marker identifying a channel administrator.
pub const CHANNEL_ADMIN_ROLE: &str = "channel_admin";

/// A message a user is about to post.
///
/// # Examples
///
/// ```
/// use chanlock_core::Post;
///
/// let post = Post::new("chan-1", "user-1", "hello");
/// assert_eq!(post.channel_id(), "chan-1");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Post {
    /// Channel the post targets
    channel_id: String,
    /// Author of the post
    user_id: String,
    /// Message body
    #[builder(default)]
    #[serde(default)]
    message: String,
}

impl Post {
    /// Create a post.
    pub fn new(
        channel_id: impl Into<String>,
        user_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            user_id: user_id.into(),
            message: message.into(),
        }
    }
}

/// A channel as reported by the host.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Channel {
    /// Channel ID
    id: String,
    /// Channel handle, matched case-insensitively against the restricted set
    name: String,
}

impl Channel {
    /// Create a channel.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A user as reported by the host.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct User {
    /// User ID
    id: String,
    /// Login handle, used in block log entries
    username: String,
}

impl User {
    /// Create a user.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// A user's membership in a channel.
///
/// `roles` is the host's space-separated role string, e.g.
/// `"channel_user channel_admin"`.
///
/// # Examples
///
/// ```
/// use chanlock_core::ChannelMember;
///
/// let member = ChannelMember::new("chan-1", "user-1", "channel_user channel_admin");
/// assert!(member.is_channel_admin());
///
/// let member = ChannelMember::new("chan-1", "user-2", "channel_user");
/// assert!(!member.is_channel_admin());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChannelMember {
    /// Channel ID
    channel_id: String,
    /// User ID
    user_id: String,
    /// Role string
    #[builder(default)]
    #[serde(default)]
    roles: String,
}

impl ChannelMember {
    /// Create a membership record.
    pub fn new(
        channel_id: impl Into<String>,
        user_id: impl Into<String>,
        roles: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            user_id: user_id.into(),
            roles: roles.into(),
        }
    }

    /// Whether the role string carries the channel admin marker.
    ///
    /// This is a substring test, so composite roles such as
    /// `"channel_admin_delegate"` also match.
    pub fn is_channel_admin(&self) -> bool {
        self.roles.contains(CHANNEL_ADMIN_ROLE)
    }
}

/// A message shown only to one user and never persisted in the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct EphemeralNotice {
    /// Recipient
    user_id: String,
    /// Channel the notice is displayed in
    channel_id: String,
    /// Notice body
    message: String,
}

impl EphemeralNotice {
    /// Create a notice.
    pub fn new(
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            message: message.into(),
        }
    }
}
