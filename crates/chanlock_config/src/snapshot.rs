//! Immutable guard configuration snapshot.

use crate::RestrictedNames;
use chanlock_core::PluginSettings;

/// Everything a guard needs to evaluate a post, derived once per reload.
///
/// Snapshots are never mutated; a reload builds a new one and swaps it in.
///
/// # Examples
///
/// ```
/// use chanlock_config::GuardConfig;
/// use chanlock_core::PluginSettings;
///
/// let config = GuardConfig::from_settings(&PluginSettings::new("Announcements", "Read only"));
/// assert!(config.is_restricted("announcements"));
/// assert_eq!(config.restricted_raw(), "Announcements");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct GuardConfig {
    /// The comma-separated names exactly as configured
    restricted_raw: String,
    /// Notice shown to rejected posters
    rejection_message: String,
    /// Parsed names
    restricted_names: RestrictedNames,
}

impl GuardConfig {
    /// Build a snapshot from the host's settings record.
    pub fn from_settings(settings: &PluginSettings) -> Self {
        Self {
            restricted_raw: settings.restricted_channel_name().clone(),
            rejection_message: settings.rejection_message().clone(),
            restricted_names: RestrictedNames::parse(settings.restricted_channel_name()),
        }
    }

    /// Whether posts to `channel_name` are restricted.
    pub fn is_restricted(&self, channel_name: &str) -> bool {
        self.restricted_names.contains(channel_name)
    }
}
