//! Error types for VenueScope

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenueError {
    // Request errors
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Venue not found: {id}")]
    NotFound { id: String },

    // Store errors
    #[error("Venue store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VenueError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field: field.into(), reason: reason.into() }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable { reason: reason.into() }
    }

    /// Whether the caller may retry the same request after backing off.
    /// The core itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VenueError::StoreUnavailable { .. })
    }
}

impl From<serde_json::Error> for VenueError {
    fn from(err: serde_json::Error) -> Self {
        VenueError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VenueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_store_unavailable_is_retryable() {
        assert!(VenueError::store_unavailable("connection refused").is_retryable());
        assert!(!VenueError::invalid_input("latitude", "out of range").is_retryable());
        assert!(!VenueError::NotFound { id: "abc".to_string() }.is_retryable());
        assert!(!VenueError::DuplicateKey { key: "place-1".to_string() }.is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = VenueError::invalid_input("longitude", "must be a number");
        assert_eq!(err.to_string(), "Invalid input for longitude: must be a number");

        let err = VenueError::DuplicateKey { key: "external_id=ChIJ123".to_string() };
        assert_eq!(err.to_string(), "Duplicate key: external_id=ChIJ123");
    }
}
