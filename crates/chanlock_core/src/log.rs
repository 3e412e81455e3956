//! Structured entries written to the host's plugin log.

use serde::{Deserialize, Serialize};

/// Severity of a host log entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum LogLevel {
    /// Informational event
    #[display("info")]
    Info,
    /// Error event
    #[display("error")]
    Error,
}

/// One host log entry: a context message plus key/value fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LogEntry {
    /// Severity
    level: LogLevel,
    /// What happened
    context: String,
    /// Key/value details, in insertion order
    fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Create an entry.
    pub fn new(level: LogLevel, context: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            level,
            context: context.into(),
            fields,
        }
    }

    /// Value of the first field named `key`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
