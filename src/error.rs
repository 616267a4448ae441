//! Error Types
//!
//! One error enum for every Artzy surface. Validation failures carry the
//! exact message shown to the user.

use thiserror::Error;

use crate::forms::FormError;

/// Errors produced by the Artzy library
#[derive(Error, Debug)]
pub enum ArtzyError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(#[from] FormError),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Missing, rejected or expired token
    #[error("Please login first")]
    Unauthorized,

    /// Artwork (or other resource) does not exist
    #[error("{0}")]
    NotFound(String),

    /// Public profile lookup for an unknown username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Transport failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Token could not be stored or read
    #[error("Session error: {0}")]
    Session(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file problem
    #[cfg(feature = "native")]
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl ArtzyError {
    /// Whether the caller should send the user back to the login page
    pub fn needs_login(&self) -> bool {
        matches!(self, ArtzyError::Unauthorized)
    }
}

/// Result type for Artzy operations
pub type ArtzyResult<T> = Result<T, ArtzyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_user_facing() {
        let err = ArtzyError::from(FormError::LoginMissingFields);
        assert_eq!(err.to_string(), "Email and password must be filled in");
    }

    #[test]
    fn test_api_error_displays_backend_message() {
        let err = ArtzyError::Api {
            status: 400,
            message: "Email already used".to_string(),
        };
        assert_eq!(err.to_string(), "Email already used");
        assert!(!err.needs_login());
        assert!(ArtzyError::Unauthorized.needs_login());
    }
}
