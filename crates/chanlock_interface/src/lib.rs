//! Host-facing interfaces for chanlock.
//!
//! The host chat server owns transport, dispatch and persistence. A plugin
//! only sees it through the traits in this crate:
//!
//! - `ChannelDirectory`, `UserDirectory`, `MembershipDirectory` - lookups
//! - `Notifier` - ephemeral notices to a single user
//! - `HostLog` - the host's plugin log sink
//! - `PluginApi` - everything above, as one bound
//! - `SettingsSource` - where configuration changes come from
//! - `MessageHook` - the capability a plugin registers with the host
//!
//! `InMemoryHost` implements all of them for tests and local tooling.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod in_memory;
mod traits;

pub use in_memory::{InMemoryHost, LookupTarget};
pub use traits::{
    ChannelDirectory, HostLog, MembershipDirectory, MessageHook, Notifier, PluginApi,
    SettingsSource, UserDirectory,
};
