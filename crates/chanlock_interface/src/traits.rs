//! Trait definitions for the host plugin API.

use async_trait::async_trait;
use chanlock_core::{Channel, ChannelMember, EphemeralNotice, PluginSettings, Post, PostDecision, User};
use chanlock_error::{ChanlockResult, LookupResult};

/// Resolves channels by ID.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Fetch a channel.
    async fn get_channel(&self, channel_id: &str) -> LookupResult<Channel>;
}

/// Resolves users by ID.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user.
    async fn get_user(&self, user_id: &str) -> LookupResult<User>;
}

/// Resolves a user's membership in a channel.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Fetch the membership of `user_id` in `channel_id`.
    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> LookupResult<ChannelMember>;
}

/// Delivers ephemeral notices.
///
/// Delivery is fire-and-forget from the plugin's point of view; the host
/// decides what to do if the user is offline.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `notice` to its recipient only.
    async fn send_ephemeral(&self, notice: EphemeralNotice);
}

/// The host's plugin log sink.
#[async_trait]
pub trait HostLog: Send + Sync {
    /// Record an error with its context.
    async fn log_error(&self, context: &str, error: &str);

    /// Record an informational event with key/value fields.
    async fn log_info(&self, context: &str, fields: &[(&str, &str)]);
}

/// The full plugin API a guard needs from its host.
pub trait PluginApi:
    ChannelDirectory + UserDirectory + MembershipDirectory + Notifier + HostLog
{
}

impl<T> PluginApi for T where
    T: ChannelDirectory + UserDirectory + MembershipDirectory + Notifier + HostLog
{
}

/// Supplies the raw settings record on configuration change.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Load the current settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the host cannot supply the record.
    async fn load_settings(&self) -> ChanlockResult<PluginSettings>;
}

/// A plugin hook the host calls before persisting each post.
#[async_trait]
pub trait MessageHook: Send + Sync {
    /// Hook identifier used in registry logs.
    fn name(&self) -> &str;

    /// Re-read settings after the host reports a configuration change.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the previously active settings stay in use.
    async fn on_configuration_change(&self, source: &dyn SettingsSource) -> ChanlockResult<()>;

    /// Decide whether `post` may be persisted.
    ///
    /// Never fails: every path produces a decision.
    async fn message_will_be_posted(&self, post: Post) -> PostDecision;
}
