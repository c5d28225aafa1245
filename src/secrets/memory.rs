//! In-memory secret store (development and testing only).
//!
//! Keeps secrets in insertion order so list-order preservation is observable
//! in tests. Not for production use: nothing is encrypted, nothing survives a
//! restart.

use async_trait::async_trait;
use std::sync::RwLock;

use super::error::{Result, StoreError};
use super::store::SecretStore;

/// In-memory secret store backed by an ordered list of entries.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    entries: RwLock<Vec<(String, String)>>,
}

impl InMemorySecretStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a secret. Replacement keeps the original position.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let mut entries = self.entries.write().expect("secret store lock poisoned");
        match entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => entries.push((name, value)),
        }
    }

    /// Remove a secret, returning whether it existed.
    pub fn remove(&self, name: &str) -> bool {
        let mut entries = self.entries.write().expect("secret store lock poisoned");
        let before = entries.len();
        entries.retain(|(n, _)| n != name);
        entries.len() != before
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let entries = self.entries.read().expect("secret store lock poisoned");
        entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn list_secret_names(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().expect("secret store lock poisoned");
        Ok(entries
            .iter()
            .filter(|(n, _)| n.starts_with(prefix))
            .map(|(n, _)| n.clone())
            .collect())
    }
}
