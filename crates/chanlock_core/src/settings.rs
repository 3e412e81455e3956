//! Raw plugin settings as stored by the host.

use serde::{Deserialize, Serialize};

/// The settings record the host hands over on every configuration change.
///
/// Field names match the host's plugin settings schema.
///
/// # Examples
///
/// ```
/// use chanlock_core::PluginSettings;
///
/// let settings: PluginSettings = serde_json::from_str(
///     r#"{"RestrictedChannelName": "announcements", "RejectionMessage": "Read only"}"#,
/// ).unwrap();
/// assert_eq!(settings.restricted_channel_name(), "announcements");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PluginSettings {
    /// Comma-separated restricted channel names
    #[serde(rename = "RestrictedChannelName", default)]
    restricted_channel_name: String,
    /// Notice shown to users whose post was rejected
    #[serde(rename = "RejectionMessage", default)]
    rejection_message: String,
}

impl PluginSettings {
    /// Create a settings record.
    pub fn new(
        restricted_channel_name: impl Into<String>,
        rejection_message: impl Into<String>,
    ) -> Self {
        Self {
            restricted_channel_name: restricted_channel_name.into(),
            rejection_message: rejection_message.into(),
        }
    }
}
