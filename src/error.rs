//! Error handling for the strmap library
//!
//! Lookup and removal report missing keys through a dedicated error kind so
//! callers can branch on it without string matching.

use thiserror::Error;

/// Main error type for the strmap library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrMapError {
    /// The requested key is not present in the table
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up
        key: String,
    },
}

impl StrMapError {
    /// Create a key-not-found error
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::KeyNotFound { key: key.into() }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StrMapError>;
