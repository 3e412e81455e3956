//! Restricted-channel post guard.
//!
//! `PostGuard` intercepts posts before the host persists them. Posts to a
//! restricted channel are discarded, with an ephemeral notice to the author,
//! unless the author is a channel admin.
//!
//! # Lookup failure policy
//!
//! | Failed lookup | Outcome |
//! |---------------|---------|
//! | channel       | allow, error logged |
//! | user          | allow, error logged |
//! | membership    | discard, error logged, no notice |
//!
//! A membership that cannot be read means admin status cannot be verified,
//! so the post is blocked.
//!
//! `HookRegistry` lets a host run several hooks in registration order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guard;
mod registry;

pub use guard::PostGuard;
pub use registry::HookRegistry;
