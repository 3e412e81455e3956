//! chanlock - restricted-channel post guard for chat-server plugins.
//!
//! A chat server calls the guard before persisting each post. Posts to a
//! channel on the restricted list are discarded, and their author gets an
//! ephemeral notice, unless the author is a channel admin.
//!
//! # Quick Start
//!
//! ```
//! use chanlock::{Channel, ChannelMember, InMemoryHost, PluginSettings, Post, PostGuard, User};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let host = Arc::new(InMemoryHost::new());
//!     host.add_channel(Channel::new("c1", "town-square")).await;
//!     host.add_user(User::new("u1", "alice")).await;
//!     host.add_member(ChannelMember::new("c1", "u1", "channel_user")).await;
//!     host.set_settings(Some(PluginSettings::new("Town-Square", "Read only"))).await;
//!
//!     let guard = PostGuard::new(host.clone());
//!     guard.reload_configuration(host.as_ref()).await?;
//!
//!     let (post, signal) = guard
//!         .on_post_submit(Post::new("c1", "u1", "hello"))
//!         .await
//!         .into_host_reply();
//!     assert!(post.is_none());
//!     assert_eq!(signal, "Town-Square");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `chanlock_error` - Error types
//! - `chanlock_core` - Host entities, settings record, decisions
//! - `chanlock_interface` - Host plugin API traits and the in-memory host
//! - `chanlock_config` - Restricted name parsing and settings loading
//! - `chanlock_guard` - `PostGuard` and `HookRegistry`
//!
//! This crate re-exports everything for convenience.

pub use chanlock_config::*;
pub use chanlock_core::*;
pub use chanlock_error::*;
pub use chanlock_guard::*;
pub use chanlock_interface::*;

pub mod observability;
