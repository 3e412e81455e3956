//! In-memory host implementation for testing and local tooling.
//!
//! `InMemoryHost` keeps channels, users and memberships in HashMaps behind
//! RwLocks, records every notice and log entry it receives, and can be told
//! to fail specific lookups so fail-open and fail-closed paths can be driven
//! deterministically.

use crate::{ChannelDirectory, HostLog, MembershipDirectory, Notifier, SettingsSource, UserDirectory};
use async_trait::async_trait;
use chanlock_core::{
    Channel, ChannelMember, EphemeralNotice, LogEntry, LogLevel, PluginSettings, User,
};
use chanlock_error::{ChanlockResult, ConfigError, LookupError, LookupErrorKind, LookupResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A host lookup that can be forced to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupTarget {
    /// `get_channel`
    Channel,
    /// `get_user`
    User,
    /// `get_channel_member`
    Member,
}

/// In-memory host for tests and the CLI.
///
/// Clones share state, so a test can hand one clone to a guard and inspect
/// the other.
///
/// # Example
/// ```
/// use chanlock_interface::{ChannelDirectory, InMemoryHost};
/// use chanlock_core::Channel;
///
/// #[tokio::main]
/// async fn main() {
///     let host = InMemoryHost::new();
///     host.add_channel(Channel::new("c1", "town-square")).await;
///     let channel = host.get_channel("c1").await.unwrap();
///     assert_eq!(channel.name(), "town-square");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    channels: Arc<RwLock<HashMap<String, Channel>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
    members: Arc<RwLock<HashMap<(String, String), ChannelMember>>>,
    failing: Arc<RwLock<HashSet<LookupTarget>>>,
    settings: Arc<RwLock<Option<PluginSettings>>>,
    notices: Arc<RwLock<Vec<EphemeralNotice>>>,
    logs: Arc<RwLock<Vec<LogEntry>>>,
}

impl InMemoryHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel.
    pub async fn add_channel(&self, channel: Channel) {
        self.channels
            .write()
            .await
            .insert(channel.id().clone(), channel);
    }

    /// Register a user.
    pub async fn add_user(&self, user: User) {
        self.users.write().await.insert(user.id().clone(), user);
    }

    /// Register a channel membership.
    pub async fn add_member(&self, member: ChannelMember) {
        let key = (member.channel_id().clone(), member.user_id().clone());
        self.members.write().await.insert(key, member);
    }

    /// Make every subsequent call to `target` fail with a host error.
    pub async fn fail_lookup(&self, target: LookupTarget) {
        self.failing.write().await.insert(target);
    }

    /// Undo `fail_lookup`.
    pub async fn restore_lookup(&self, target: LookupTarget) {
        self.failing.write().await.remove(&target);
    }

    /// Set the settings record returned by `load_settings`.
    ///
    /// `None` makes `load_settings` fail.
    pub async fn set_settings(&self, settings: Option<PluginSettings>) {
        *self.settings.write().await = settings;
    }

    /// Notices delivered so far.
    pub async fn notices(&self) -> Vec<EphemeralNotice> {
        self.notices.read().await.clone()
    }

    /// Log entries recorded so far.
    pub async fn logs(&self) -> Vec<LogEntry> {
        self.logs.read().await.clone()
    }

    /// Log entries recorded at `level`.
    pub async fn logs_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.logs
            .read()
            .await
            .iter()
            .filter(|entry| *entry.level() == level)
            .cloned()
            .collect()
    }

    /// Forget recorded notices and logs.
    pub async fn clear_records(&self) {
        self.notices.write().await.clear();
        self.logs.write().await.clear();
    }

    async fn check_failure(&self, target: LookupTarget) -> LookupResult<()> {
        if self.failing.read().await.contains(&target) {
            return Err(LookupError::new(LookupErrorKind::Host(format!(
                "{:?} lookup unavailable",
                target
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl ChannelDirectory for InMemoryHost {
    async fn get_channel(&self, channel_id: &str) -> LookupResult<Channel> {
        self.check_failure(LookupTarget::Channel).await?;
        self.channels
            .read()
            .await
            .get(channel_id)
            .cloned()
            .ok_or_else(|| LookupError::new(LookupErrorKind::ChannelNotFound(channel_id.to_string())))
    }
}

#[async_trait]
impl UserDirectory for InMemoryHost {
    async fn get_user(&self, user_id: &str) -> LookupResult<User> {
        self.check_failure(LookupTarget::User).await?;
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| LookupError::new(LookupErrorKind::UserNotFound(user_id.to_string())))
    }
}

#[async_trait]
impl MembershipDirectory for InMemoryHost {
    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> LookupResult<ChannelMember> {
        self.check_failure(LookupTarget::Member).await?;
        let key = (channel_id.to_string(), user_id.to_string());
        self.members.read().await.get(&key).cloned().ok_or_else(|| {
            LookupError::new(LookupErrorKind::MemberNotFound {
                channel_id: channel_id.to_string(),
                user_id: user_id.to_string(),
            })
        })
    }
}

#[async_trait]
impl Notifier for InMemoryHost {
    async fn send_ephemeral(&self, notice: EphemeralNotice) {
        debug!(user_id = %notice.user_id(), channel_id = %notice.channel_id(), "Delivering ephemeral notice");
        self.notices.write().await.push(notice);
    }
}

#[async_trait]
impl HostLog for InMemoryHost {
    async fn log_error(&self, context: &str, err: &str) {
        debug!(context, error = %err, "Recording host error log");
        self.logs.write().await.push(LogEntry::new(
            LogLevel::Error,
            context,
            vec![("error".to_string(), err.to_string())],
        ));
    }

    async fn log_info(&self, context: &str, fields: &[(&str, &str)]) {
        debug!(context, ?fields, "Recording host info log");
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.logs
            .write()
            .await
            .push(LogEntry::new(LogLevel::Info, context, fields));
    }
}

#[async_trait]
impl SettingsSource for InMemoryHost {
    async fn load_settings(&self) -> ChanlockResult<PluginSettings> {
        let settings = self.settings.read().await.clone();
        settings.ok_or_else(|| ConfigError::unavailable("Host has no plugin configuration").into())
    }
}
