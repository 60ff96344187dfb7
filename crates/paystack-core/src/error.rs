//! Error types shared across the SDK crates.
//!
//! Covers input validation for values the core crate constructs itself:
//! secret keys and event kind tags. Transport and webhook failures live in
//! their own crates.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for value construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Secret key was empty or whitespace.
    #[error("[C1001] Invalid secret key: {0}")]
    InvalidSecretKey(String),

    /// Tag does not name any event kind in the catalog.
    #[error("[C1002] Unknown event kind: {tag}")]
    UnknownEventKind {
        /// The tag that failed to match.
        tag: String,
    },
}

impl CoreError {
    /// Returns the error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSecretKey(_) => "C1001",
            Self::UnknownEventKind { .. } => "C1002",
        }
    }
}
