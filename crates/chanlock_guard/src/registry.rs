//! Ordered registry of message hooks.
//!
//! The host registers hooks once at activation, forwards every configuration
//! change to all of them, and runs each post through them in order.

use chanlock_core::{Post, PostDecision};
use chanlock_error::ChanlockResult;
use chanlock_interface::{MessageHook, SettingsSource};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Registry of message hooks, evaluated in registration order.
///
/// # Example
///
/// ```
/// use chanlock_core::{Channel, ChannelMember, PluginSettings, Post, User};
/// use chanlock_guard::{HookRegistry, PostGuard};
/// use chanlock_interface::InMemoryHost;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let host = Arc::new(InMemoryHost::new());
///     host.add_channel(Channel::new("c1", "announcements")).await;
///     host.add_user(User::new("u1", "alice")).await;
///     host.add_member(ChannelMember::new("c1", "u1", "channel_admin")).await;
///     host.set_settings(Some(PluginSettings::new("announcements", "Read only"))).await;
///
///     let mut registry = HookRegistry::new();
///     registry.register(PostGuard::new(host.clone()));
///     assert_eq!(registry.names(), vec!["chanlock"]);
///
///     registry.reload_all(host.as_ref()).await?;
///     let decision = registry.dispatch(Post::new("c1", "u1", "hi")).await;
///     assert!(decision.is_allowed());
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn MessageHook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        debug!("Creating new HookRegistry");
        Self { hooks: Vec::new() }
    }

    /// Register a hook after those already present.
    pub fn register<H: MessageHook + 'static>(&mut self, hook: H) -> &mut Self {
        self.register_shared(Arc::new(hook))
    }

    /// Register a hook the caller keeps a handle to.
    pub fn register_shared(&mut self, hook: Arc<dyn MessageHook>) -> &mut Self {
        info!(hook = hook.name(), position = self.hooks.len(), "Registering message hook");
        self.hooks.push(hook);
        self
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hook is registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of registered hooks, in order.
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Forward a configuration change to every hook.
    ///
    /// All hooks are attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    #[instrument(skip(self, source), fields(hooks = self.hooks.len()))]
    pub async fn reload_all(&self, source: &dyn SettingsSource) -> ChanlockResult<()> {
        let mut first_error = None;
        for hook in &self.hooks {
            if let Err(e) = hook.on_configuration_change(source).await {
                error!(hook = hook.name(), error = %e, "Hook rejected configuration change");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Run `post` through every hook until one discards it.
    #[instrument(skip(self, post), fields(hooks = self.hooks.len()))]
    pub async fn dispatch(&self, post: Post) -> PostDecision {
        let mut post = post;
        for hook in &self.hooks {
            match hook.message_will_be_posted(post).await {
                PostDecision::Allow(kept) => post = kept,
                discard @ PostDecision::Discard { .. } => {
                    debug!(hook = hook.name(), "Post discarded");
                    return discard;
                }
            }
        }
        PostDecision::Allow(post)
    }
}
