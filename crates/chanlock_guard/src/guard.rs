//! The post guard.

use async_trait::async_trait;
use chanlock_config::GuardConfig;
use chanlock_core::{EphemeralNotice, PluginSettings, Post, PostDecision};
use chanlock_error::{ChanlockResult, LookupError};
use chanlock_interface::{MessageHook, PluginApi, SettingsSource};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

/// Guards restricted channels against posts from non-admins.
///
/// The active configuration is an immutable `GuardConfig` snapshot. Reloads
/// build a fresh snapshot and swap the pointer, so a post is always evaluated
/// against one complete configuration, never a mix of old and new.
///
/// Until the first successful reload nothing is restricted.
///
/// # Example
///
/// ```
/// use chanlock_core::{Channel, ChannelMember, PluginSettings, Post, User};
/// use chanlock_guard::PostGuard;
/// use chanlock_interface::InMemoryHost;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let host = Arc::new(InMemoryHost::new());
///     host.add_channel(Channel::new("c1", "announcements")).await;
///     host.add_user(User::new("u1", "alice")).await;
///     host.add_member(ChannelMember::new("c1", "u1", "channel_user")).await;
///
///     let guard = PostGuard::new(host.clone());
///     guard
///         .apply_settings(&PluginSettings::new("Announcements", "Read only"))
///         .await;
///
///     let decision = guard.on_post_submit(Post::new("c1", "u1", "hi")).await;
///     assert!(!decision.is_allowed());
///     assert_eq!(host.notices().await.len(), 1);
/// }
/// ```
pub struct PostGuard<A: PluginApi> {
    api: Arc<A>,
    config: RwLock<Arc<GuardConfig>>,
}

impl<A: PluginApi> PostGuard<A> {
    /// Create a guard with an empty configuration.
    pub fn new(api: Arc<A>) -> Self {
        Self::with_config(api, GuardConfig::default())
    }

    /// Create a guard with an initial configuration.
    pub fn with_config(api: Arc<A>, config: GuardConfig) -> Self {
        Self {
            api,
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// The host API this guard talks to.
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// The currently active configuration snapshot.
    pub async fn config(&self) -> Arc<GuardConfig> {
        self.config.read().await.clone()
    }

    /// Reload configuration from `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged. The previous configuration stays
    /// active.
    #[instrument(skip(self, source))]
    pub async fn reload_configuration(
        &self,
        source: &dyn SettingsSource,
    ) -> ChanlockResult<Arc<GuardConfig>> {
        let settings = source.load_settings().await.map_err(|e| {
            error!(error = %e, "Failed to load plugin configuration");
            e
        })?;
        Ok(self.install(GuardConfig::from_settings(&settings)).await)
    }

    /// Replace the configuration from an already-loaded settings record.
    pub async fn apply_settings(&self, settings: &PluginSettings) -> Arc<GuardConfig> {
        self.install(GuardConfig::from_settings(settings)).await
    }

    async fn install(&self, config: GuardConfig) -> Arc<GuardConfig> {
        let snapshot = Arc::new(config);
        *self.config.write().await = snapshot.clone();
        info!(
            restricted = %snapshot.restricted_names(),
            "Installed restricted channel configuration"
        );
        snapshot
    }

    /// Decide whether `post` may be persisted.
    ///
    /// Each lookup is attempted once. Channel and user lookup failures allow
    /// the post; a membership lookup failure discards it with an empty
    /// auxiliary signal.
    #[instrument(skip(self, post), fields(channel_id = %post.channel_id(), user_id = %post.user_id()))]
    pub async fn on_post_submit(&self, post: Post) -> PostDecision {
        let config = self.config().await;

        let channel = match self.api.get_channel(post.channel_id()).await {
            Ok(channel) => channel,
            Err(e) => {
                self.report_error("Failed to get channel", &e).await;
                return PostDecision::Allow(post);
            }
        };

        if !config.is_restricted(channel.name()) {
            debug!(channel = %channel.name(), "Channel is not restricted");
            return PostDecision::Allow(post);
        }

        let user = match self.api.get_user(post.user_id()).await {
            Ok(user) => user,
            Err(e) => {
                self.report_error("Failed to get user", &e).await;
                return PostDecision::Allow(post);
            }
        };

        let member = match self
            .api
            .get_channel_member(post.channel_id(), post.user_id())
            .await
        {
            Ok(member) => member,
            Err(e) => {
                self.report_error("Failed to get channel member", &e).await;
                return PostDecision::Discard {
                    restricted: String::new(),
                };
            }
        };

        if member.is_channel_admin() {
            debug!(user = %user.username(), "Channel admin may post");
            return PostDecision::Allow(post);
        }

        self.api
            .send_ephemeral(EphemeralNotice::new(
                post.user_id().as_str(),
                post.channel_id().as_str(),
                config.rejection_message().as_str(),
            ))
            .await;

        info!(user = %user.username(), channel = %channel.name(), "Blocked non-channel admin post");
        self.api
            .log_info(
                "Blocked non-channel admin post",
                &[("user", user.username().as_str())],
            )
            .await;

        PostDecision::Discard {
            restricted: config.restricted_raw().clone(),
        }
    }

    async fn report_error(&self, context: &str, err: &LookupError) {
        error!(error = %err, "{}", context);
        self.api.log_error(context, &err.to_string()).await;
    }
}

#[async_trait]
impl<A: PluginApi + 'static> MessageHook for PostGuard<A> {
    fn name(&self) -> &str {
        "chanlock"
    }

    async fn on_configuration_change(&self, source: &dyn SettingsSource) -> ChanlockResult<()> {
        self.reload_configuration(source).await.map(|_| ())
    }

    async fn message_will_be_posted(&self, post: Post) -> PostDecision {
        self.on_post_submit(post).await
    }
}
