//! Process-level error types for the sidecar.
//!
//! Failures while talking to the secrets backend have their own taxonomy in
//! [`crate::secrets::error`] and never pass through this type. The variants
//! here cover what can go wrong before a request is ever served: bad
//! configuration, a listener that cannot bind, a subscriber that fails to
//! install.

/// Result alias for startup and server-lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Faults that terminate the sidecar process.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required setting is missing or unparseable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP listener failed to bind or serve.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Anything else that prevents the process from running.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = Error::config("bad port");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: bad port");

        let err = Error::transport("bind failed");
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: bind failed");

        let err = Error::internal("subscriber already set");
        assert!(matches!(err, Error::Internal(_)));
    }
}
