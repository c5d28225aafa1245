//! Core secret store trait.

use async_trait::async_trait;

use super::error::Result;

/// Trait for secret store backends.
///
/// Provides the two capabilities the sidecar needs from a backend:
/// fetch-by-name and list-by-prefix. Implementations must be `Send + Sync`
/// because one long-lived store handle is shared by all request handlers.
///
/// # Errors
///
/// Implementations classify backend failures into [`StoreError`] variants;
/// anything the backend does not report with a recognizable code becomes
/// [`StoreError::Unknown`] or [`StoreError::Unexpected`].
///
/// [`StoreError`]: super::error::StoreError
/// [`StoreError::Unknown`]: super::error::StoreError::Unknown
/// [`StoreError::Unexpected`]: super::error::StoreError::Unexpected
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Retrieve the raw string value of a secret by its fully-qualified name.
    ///
    /// No retries: a single failed attempt surfaces as an error.
    async fn get_secret(&self, name: &str) -> Result<String>;

    /// List the fully-qualified names of secrets whose name starts with
    /// `prefix`, in the order the backend returns them.
    ///
    /// An empty prefix lists everything the backend will show us.
    async fn list_secret_names(&self, prefix: &str) -> Result<Vec<String>>;
}
