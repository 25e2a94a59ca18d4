//! Custom error types for fintrack-core
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Registration attempted with an email that already has an account.
    /// Carries the normalized form of the offending email.
    #[error("An account already exists for {email}")]
    DuplicateEmail { email: String },

    /// Login attempted with no matching normalized email+secret pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Persisted state failed to parse. Recovered silently where allowed
    /// (session snapshot, transaction store); surfaced only by low-level
    /// loads.
    #[error("Corrupt persisted state: {0}")]
    CorruptState(String),

    /// A required field was empty after normalization
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Key-value backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Create a duplicate-email error from the normalized email
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Check if this is a duplicate-email error
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }

    /// Check if this is an invalid-credentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a corrupt-state error
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, Self::CorruptState(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack-core operations
pub type CoreResult<T> = Result<T, CoreError>;
