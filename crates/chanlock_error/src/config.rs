//! Plugin settings load errors.

/// How far a settings load got before it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SettingsStage {
    /// The host had no settings record to hand over.
    #[display("unavailable")]
    Unavailable,
    /// A settings file or layer could not be read.
    #[display("unreadable")]
    Unreadable,
    /// The record was read but did not decode into plugin settings.
    #[display("malformed")]
    Malformed,
}

/// A failed plugin settings load.
///
/// A failed reload leaves the previous configuration active, so this error
/// is reported to the host and never reaches post evaluation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Plugin settings {}: {} at line {} in {}", stage, message, line, file)]
pub struct ConfigError {
    /// Stage that failed
    pub stage: SettingsStage,
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// The host could not supply a settings record.
    ///
    /// # Examples
    ///
    /// ```
    /// use chanlock_error::{ConfigError, SettingsStage};
    ///
    /// let err = ConfigError::unavailable("host returned no configuration");
    /// assert_eq!(err.stage, SettingsStage::Unavailable);
    /// assert!(err.to_string().starts_with("Plugin settings unavailable"));
    /// ```
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::at_caller(SettingsStage::Unavailable, message.into())
    }

    /// A settings source could not be read.
    #[track_caller]
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::at_caller(SettingsStage::Unreadable, message.into())
    }

    /// A settings source was read but did not decode.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::at_caller(SettingsStage::Malformed, message.into())
    }

    #[track_caller]
    fn at_caller(stage: SettingsStage, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
