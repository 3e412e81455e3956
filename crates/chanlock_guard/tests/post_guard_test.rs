//! Tests for the post guard decision procedure.

use chanlock_config::GuardConfig;
use chanlock_core::{Channel, ChannelMember, LogLevel, PluginSettings, Post, PostDecision, User};
use chanlock_guard::PostGuard;
use chanlock_interface::{InMemoryHost, LookupTarget, MessageHook};
use std::sync::Arc;

const RESTRICTED: &str = "General, random ,, VIP";
const REJECTION: &str = "Only channel admins can post here.";

/// Host with one restricted channel (`vip`), one open channel (`lobby`),
/// an admin (`boss`) and a regular member (`pleb`) in both.
async fn setup() -> (Arc<InMemoryHost>, PostGuard<InMemoryHost>) {
    let host = Arc::new(InMemoryHost::new());
    host.add_channel(Channel::new("c-vip", "VIP")).await;
    host.add_channel(Channel::new("c-lobby", "lobby")).await;
    host.add_user(User::new("u-boss", "boss")).await;
    host.add_user(User::new("u-pleb", "pleb")).await;
    for channel in ["c-vip", "c-lobby"] {
        host.add_member(ChannelMember::new(channel, "u-boss", "channel_user channel_admin"))
            .await;
        host.add_member(ChannelMember::new(channel, "u-pleb", "channel_user"))
            .await;
    }

    let guard = PostGuard::with_config(
        host.clone(),
        GuardConfig::from_settings(&PluginSettings::new(RESTRICTED, REJECTION)),
    );
    (host, guard)
}

#[tokio::test]
async fn test_unrestricted_channel_allows_anyone() {
    let (host, guard) = setup().await;
    let post = Post::new("c-lobby", "u-pleb", "hello");

    let decision = guard.on_post_submit(post.clone()).await;
    assert_eq!(decision, PostDecision::Allow(post));
    assert_eq!(decision.signal(), "");
    assert!(host.notices().await.is_empty());
    assert!(host.logs().await.is_empty());
}

#[tokio::test]
async fn test_unrestricted_channel_ignores_user_and_member_failures() {
    let (host, guard) = setup().await;
    host.fail_lookup(LookupTarget::User).await;
    host.fail_lookup(LookupTarget::Member).await;
    let post = Post::new("c-lobby", "u-pleb", "hello");

    let decision = guard.on_post_submit(post.clone()).await;
    assert_eq!(decision, PostDecision::Allow(post));
    assert!(host.logs().await.is_empty());
}

#[tokio::test]
async fn test_admin_posts_in_restricted_channel() {
    let (host, guard) = setup().await;
    let post = Post::new("c-vip", "u-boss", "announcement");

    let decision = guard.on_post_submit(post.clone()).await;
    assert_eq!(decision, PostDecision::Allow(post));
    assert!(host.notices().await.is_empty());
}

#[tokio::test]
async fn test_non_admin_blocked_in_restricted_channel() {
    let (host, guard) = setup().await;
    let post = Post::new("c-vip", "u-pleb", "me too");

    let (kept, signal) = guard.on_post_submit(post).await.into_host_reply();
    assert!(kept.is_none());
    assert_eq!(signal, RESTRICTED);

    let notices = host.notices().await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].user_id(), "u-pleb");
    assert_eq!(notices[0].channel_id(), "c-vip");
    assert_eq!(notices[0].message(), REJECTION);

    let infos = host.logs_at(LogLevel::Info).await;
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].context(), "Blocked non-channel admin post");
    assert_eq!(infos[0].field("user"), Some("pleb"));
    assert!(host.logs_at(LogLevel::Error).await.is_empty());
}

#[tokio::test]
async fn test_channel_lookup_failure_fails_open() {
    let (host, guard) = setup().await;
    host.fail_lookup(LookupTarget::Channel).await;
    let post = Post::new("c-vip", "u-pleb", "me too");

    let decision = guard.on_post_submit(post.clone()).await;
    assert_eq!(decision, PostDecision::Allow(post));
    assert!(host.notices().await.is_empty());

    let errors = host.logs_at(LogLevel::Error).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context(), "Failed to get channel");
    assert_eq!(host.logs().await.len(), 1);
}

#[tokio::test]
async fn test_unknown_channel_fails_open() {
    let (host, guard) = setup().await;
    let post = Post::new("c-missing", "u-pleb", "hello?");

    assert!(guard.on_post_submit(post).await.is_allowed());
    assert_eq!(host.logs_at(LogLevel::Error).await.len(), 1);
}

#[tokio::test]
async fn test_user_lookup_failure_fails_open() {
    let (host, guard) = setup().await;
    host.fail_lookup(LookupTarget::User).await;
    let post = Post::new("c-vip", "u-pleb", "me too");

    let decision = guard.on_post_submit(post.clone()).await;
    assert_eq!(decision, PostDecision::Allow(post));
    assert!(host.notices().await.is_empty());

    let errors = host.logs_at(LogLevel::Error).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context(), "Failed to get user");
    assert_eq!(host.logs().await.len(), 1);
}

#[tokio::test]
async fn test_member_lookup_failure_fails_closed() {
    let (host, guard) = setup().await;
    host.fail_lookup(LookupTarget::Member).await;
    let post = Post::new("c-vip", "u-boss", "announcement");

    let (kept, signal) = guard.on_post_submit(post).await.into_host_reply();
    assert!(kept.is_none());
    assert!(signal.is_empty());
    assert!(host.notices().await.is_empty());

    let errors = host.logs_at(LogLevel::Error).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context(), "Failed to get channel member");
    assert_eq!(host.logs().await.len(), 1);
}

#[tokio::test]
async fn test_non_member_is_blocked_without_notice() {
    let (host, guard) = setup().await;
    host.add_user(User::new("u-guest", "guest")).await;
    let post = Post::new("c-vip", "u-guest", "hi");

    assert!(!guard.on_post_submit(post).await.is_allowed());
    assert!(host.notices().await.is_empty());
}

#[tokio::test]
async fn test_matching_ignores_case_both_ways() {
    let host = Arc::new(InMemoryHost::new());
    host.add_channel(Channel::new("c1", "general")).await;
    host.add_channel(Channel::new("c2", "GENERAL")).await;
    host.add_user(User::new("u1", "alice")).await;
    host.add_member(ChannelMember::new("c1", "u1", "channel_user")).await;
    host.add_member(ChannelMember::new("c2", "u1", "channel_user")).await;

    let guard = PostGuard::new(host.clone());
    guard
        .apply_settings(&PluginSettings::new("General", "no"))
        .await;

    assert!(!guard.on_post_submit(Post::new("c1", "u1", "x")).await.is_allowed());
    assert!(!guard.on_post_submit(Post::new("c2", "u1", "x")).await.is_allowed());
    assert_eq!(host.notices().await.len(), 2);
}

#[tokio::test]
async fn test_unconfigured_guard_allows_everything() {
    let (host, _) = setup().await;
    let guard = PostGuard::new(host.clone());

    assert!(guard.on_post_submit(Post::new("c-vip", "u-pleb", "x")).await.is_allowed());
    assert!(host.notices().await.is_empty());
}

#[tokio::test]
async fn test_empty_rejection_message_still_notifies() {
    let (host, guard) = setup().await;
    guard.apply_settings(&PluginSettings::new("vip", "")).await;

    let decision = guard.on_post_submit(Post::new("c-vip", "u-pleb", "x")).await;
    assert_eq!(decision.signal(), "vip");

    let notices = host.notices().await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message(), "");
}

#[tokio::test]
async fn test_message_hook_delegates_to_guard() {
    let (host, guard) = setup().await;
    assert_eq!(guard.name(), "chanlock");

    let decision = guard
        .message_will_be_posted(Post::new("c-vip", "u-pleb", "x"))
        .await;
    assert!(!decision.is_allowed());
    assert_eq!(host.notices().await.len(), 1);
}
