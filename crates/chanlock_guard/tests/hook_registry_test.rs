//! Tests for the hook registry.

use async_trait::async_trait;
use chanlock_core::{Channel, ChannelMember, PluginSettings, Post, PostDecision, User};
use chanlock_error::{ChanlockResult, ConfigError};
use chanlock_guard::{HookRegistry, PostGuard};
use chanlock_interface::{InMemoryHost, MessageHook, SettingsSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hook that counts calls and optionally rejects configuration.
#[derive(Default)]
struct CountingHook {
    posts: AtomicUsize,
    reloads: AtomicUsize,
    reject_config: bool,
}

#[async_trait]
impl MessageHook for CountingHook {
    fn name(&self) -> &str {
        "counting"
    }

    async fn on_configuration_change(&self, _source: &dyn SettingsSource) -> ChanlockResult<()> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        if self.reject_config {
            return Err(ConfigError::unavailable("counting hook refuses").into());
        }
        Ok(())
    }

    async fn message_will_be_posted(&self, post: Post) -> PostDecision {
        self.posts.fetch_add(1, Ordering::SeqCst);
        PostDecision::Allow(post)
    }
}

async fn host_with_restricted_channel() -> Arc<InMemoryHost> {
    let host = Arc::new(InMemoryHost::new());
    host.add_channel(Channel::new("c1", "vip")).await;
    host.add_user(User::new("u1", "alice")).await;
    host.add_member(ChannelMember::new("c1", "u1", "channel_user")).await;
    host.set_settings(Some(PluginSettings::new("vip", "no")))
        .await;
    host
}

#[tokio::test]
async fn test_empty_registry_allows() {
    let registry = HookRegistry::new();
    assert!(registry.is_empty());

    let post = Post::new("c1", "u1", "x");
    assert_eq!(registry.dispatch(post.clone()).await, PostDecision::Allow(post));
}

#[tokio::test]
async fn test_dispatch_stops_at_first_discard() {
    let host = host_with_restricted_channel().await;
    let counter = Arc::new(CountingHook::default());

    let mut registry = HookRegistry::new();
    registry
        .register(PostGuard::new(host.clone()))
        .register_shared(counter.clone());
    assert_eq!(registry.names(), vec!["chanlock", "counting"]);

    registry.reload_all(host.as_ref()).await.unwrap();
    assert_eq!(counter.reloads.load(Ordering::SeqCst), 1);

    let decision = registry.dispatch(Post::new("c1", "u1", "x")).await;
    assert_eq!(decision.signal(), "vip");
    assert_eq!(counter.posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_allowed_posts_reach_every_hook() {
    let host = host_with_restricted_channel().await;
    host.add_channel(Channel::new("c2", "lobby")).await;
    let counter = Arc::new(CountingHook::default());

    let mut registry = HookRegistry::new();
    registry
        .register(PostGuard::new(host.clone()))
        .register_shared(counter.clone());
    registry.reload_all(host.as_ref()).await.unwrap();

    assert!(registry.dispatch(Post::new("c2", "u1", "x")).await.is_allowed());
    assert_eq!(counter.posts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_reload_all_attempts_every_hook() {
    let host = host_with_restricted_channel().await;
    let failing = Arc::new(CountingHook {
        reject_config: true,
        ..Default::default()
    });
    let guard = Arc::new(PostGuard::new(host.clone()));

    let mut registry = HookRegistry::new();
    registry
        .register_shared(failing.clone())
        .register_shared(guard.clone());

    assert!(registry.reload_all(host.as_ref()).await.is_err());
    assert_eq!(failing.reloads.load(Ordering::SeqCst), 1);
    assert!(guard.config().await.is_restricted("vip"));
}
