//! Host lookup error types.

/// Specific lookup failure conditions reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LookupErrorKind {
    /// Channel not found by ID.
    #[display("Channel not found: {_0}")]
    ChannelNotFound(String),

    /// User not found by ID.
    #[display("User not found: {_0}")]
    UserNotFound(String),

    /// User is not a member of the channel, or membership is unreadable.
    #[display("Channel member not found: user {} in channel {}", user_id, channel_id)]
    MemberNotFound {
        /// Channel that was queried
        channel_id: String,
        /// User that was queried
        user_id: String,
    },

    /// Any other failure inside the host API.
    #[display("Host API error: {_0}")]
    Host(String),
}

/// Lookup error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: {} at line {} in {}", kind, line, file)]
pub struct LookupError {
    /// The specific error kind
    pub kind: LookupErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl LookupError {
    /// Create a new lookup error with location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use chanlock_error::{LookupError, LookupErrorKind};
    ///
    /// let err = LookupError::new(LookupErrorKind::ChannelNotFound("town-square".into()));
    /// assert!(err.to_string().contains("town-square"));
    /// ```
    #[track_caller]
    pub fn new(kind: LookupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LookupErrorKind {
        &self.kind
    }
}

/// Result type for host lookups.
pub type LookupResult<T> = Result<T, LookupError>;
