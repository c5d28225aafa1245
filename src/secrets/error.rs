//! Error types for secret store operations.
//!
//! The backend SDK's exception hierarchy is collapsed into this closed enum at
//! the store boundary, so the HTTP-mapping layer never sees SDK types.

use thiserror::Error;

/// Result type for secret store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when talking to the secrets backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Secret not found in the backend.
    #[error("Secret not found: {name}")]
    NotFound { name: String },

    /// The backend rejected a parameter (malformed identifier).
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The backend rejected the request shape.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The backend could not decrypt the stored secret material.
    #[error("Decryption failure: {message}")]
    DecryptionFailure { message: String },

    /// Backend-side internal failure unrelated to caller input.
    #[error("Backend service failure: {message}")]
    ServiceFailure { message: String },

    /// A backend error code outside the enumerated set.
    #[error("Unknown backend error '{code}': {message}")]
    Unknown { code: String, message: String },

    /// Any other runtime fault (network failure, malformed response).
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl StoreError {
    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter { message: message.into() }
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    /// Create a decryption failure error.
    pub fn decryption_failure(message: impl Into<String>) -> Self {
        Self::DecryptionFailure { message: message.into() }
    }

    /// Create a service failure error.
    pub fn service_failure(message: impl Into<String>) -> Self {
        Self::ServiceFailure { message: message.into() }
    }

    /// Create an unknown backend error.
    pub fn unknown(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unknown { code: code.into(), message: message.into() }
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = StoreError::not_found("myapp/db");
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "Secret not found: myapp/db");

        let err = StoreError::unknown("ThrottlingException", "rate exceeded");
        assert!(matches!(err, StoreError::Unknown { .. }));
        assert!(err.to_string().contains("ThrottlingException"));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::decryption_failure("KMS key disabled");
        assert!(err.to_string().contains("Decryption failure"));
        assert!(err.to_string().contains("KMS key disabled"));
    }
}
