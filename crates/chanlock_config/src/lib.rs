//! Configuration for chanlock.
//!
//! - `RestrictedNames` - the normalized restricted channel set
//! - `GuardConfig` - the immutable snapshot a guard evaluates posts against
//! - `ChanlockConfig` - TOML/environment settings loading
//! - `ConfigFileSource` - a `SettingsSource` that re-reads settings on every reload

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;
mod names;
mod snapshot;

pub use loader::{ChanlockConfig, ConfigFileSource};
pub use names::RestrictedNames;
pub use snapshot::GuardConfig;
