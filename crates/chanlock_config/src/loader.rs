//! Settings loading from TOML files and the environment.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (chanlock.toml shipped with the library)
//! 2. `~/.config/chanlock/chanlock.toml`
//! 3. `./chanlock.toml`
//! 4. `CHANLOCK_*` environment variables
//!
//! User files are optional and silently skipped if missing.

use async_trait::async_trait;
use chanlock_core::PluginSettings;
use chanlock_error::{ChanlockError, ChanlockResult, ConfigError};
use chanlock_interface::SettingsSource;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Plugin settings as written in `chanlock.toml`.
///
/// ```toml
/// restricted_channel_name = "announcements, town-square"
/// rejection_message = "Only channel admins can post here."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChanlockConfig {
    /// Comma-separated restricted channel names
    #[serde(default)]
    pub restricted_channel_name: String,

    /// Notice shown to rejected posters
    #[serde(default)]
    pub rejection_message: String,
}

impl ChanlockConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ChanlockResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ChanlockError::from(ConfigError::unreadable(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChanlockError::from(ConfigError::malformed(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chanlock_config::ChanlockConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ChanlockConfig::load()?;
    /// println!("Restricted: {}", config.restricted_channel_name);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> ChanlockResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../chanlock.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/chanlock/chanlock.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("chanlock").required(false))
            .add_source(Environment::with_prefix("CHANLOCK"));

        builder
            .build()
            .map_err(|e| {
                ChanlockError::from(ConfigError::unreadable(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChanlockError::from(ConfigError::malformed(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Convert into the host settings record.
    pub fn into_settings(self) -> PluginSettings {
        PluginSettings::new(self.restricted_channel_name, self.rejection_message)
    }
}

/// A `SettingsSource` that re-reads configuration on every reload.
///
/// With a path, only that file is read; without one, the layered lookup of
/// [`ChanlockConfig::load`] is used.
#[derive(Debug, Clone, Default)]
pub struct ConfigFileSource {
    path: Option<PathBuf>,
}

impl ConfigFileSource {
    /// Read settings from the layered default locations.
    pub fn layered() -> Self {
        Self { path: None }
    }

    /// Read settings from one file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The explicit file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[async_trait]
impl SettingsSource for ConfigFileSource {
    async fn load_settings(&self) -> ChanlockResult<PluginSettings> {
        let config = match &self.path {
            Some(path) => ChanlockConfig::from_file(path)?,
            None => ChanlockConfig::load()?,
        };
        Ok(config.into_settings())
    }
}
