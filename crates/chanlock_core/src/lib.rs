//! Core data types for chanlock.
//!
//! These are the host entities a post guard observes (posts, channels, users,
//! memberships), the raw plugin settings record, and the decision handed back
//! to the host.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decision;
mod entities;
mod log;
mod settings;

pub use decision::PostDecision;
pub use entities::{
    CHANNEL_ADMIN_ROLE, Channel, ChannelBuilder, ChannelMember, ChannelMemberBuilder,
    EphemeralNotice, Post, PostBuilder, User, UserBuilder,
};
pub use log::{LogEntry, LogLevel};
pub use settings::PluginSettings;
