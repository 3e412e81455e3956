//! Error types for chanlock.
//!
//! This crate provides the foundation error types used throughout the chanlock workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use chanlock_error::{ChanlockResult, ConfigError};
//!
//! fn load_settings() -> ChanlockResult<String> {
//!     Err(ConfigError::unavailable("plugin configuration missing"))?
//! }
//!
//! match load_settings() {
//!     Ok(raw) => println!("Got: {}", raw),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod lookup;

pub use config::{ConfigError, SettingsStage};
pub use error::{ChanlockError, ChanlockErrorKind, ChanlockResult};
pub use lookup::{LookupError, LookupErrorKind, LookupResult};
