//! Top-level error wrapper types.

use crate::{ConfigError, LookupError};

/// Every error condition chanlock can surface to a caller.
///
/// # Examples
///
/// ```
/// use chanlock_error::{ChanlockError, ConfigError};
///
/// let config_err = ConfigError::unavailable("no settings record");
/// let err: ChanlockError = config_err.into();
/// assert!(format!("{}", err).contains("Plugin settings unavailable"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChanlockErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Host lookup error
    #[from(LookupError)]
    Lookup(LookupError),
}

/// Chanlock error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chanlock_error::{ChanlockResult, ConfigError};
///
/// fn might_fail() -> ChanlockResult<()> {
///     Err(ConfigError::malformed("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chanlock Error: {}", _0)]
pub struct ChanlockError(Box<ChanlockErrorKind>);

impl ChanlockError {
    /// Create a new error from a kind.
    pub fn new(kind: ChanlockErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChanlockErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ChanlockErrorKind
impl<T> From<T> for ChanlockError
where
    T: Into<ChanlockErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for chanlock operations.
pub type ChanlockResult<T> = std::result::Result<T, ChanlockError>;
