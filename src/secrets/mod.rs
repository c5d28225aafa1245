//! Secrets backend abstraction.
//!
//! The sidecar needs exactly two capabilities from its backend: fetch a
//! secret's raw string by name, and list secret names by prefix. The
//! [`SecretStore`] trait captures that surface, and [`StoreError`] is the
//! closed error taxonomy every implementation maps its failures into — the
//! HTTP layer depends only on these two types, never on SDK error shapes.
//!
//! # Backends
//!
//! - **AWS Secrets Manager** ([`AwsSecretStore`]): the production backend.
//! - **In-memory** ([`InMemorySecretStore`]): development and test backend
//!   with deterministic ordering.
//!
//! # Security Considerations
//!
//! - Secret values are never logged; failures log codes and names only
//! - No caching: every request hits the backend

pub mod aws;
pub mod error;
pub mod memory;
pub mod store;
pub mod value;

pub use aws::AwsSecretStore;
pub use error::{Result, StoreError};
pub use memory::InMemorySecretStore;
pub use store::SecretStore;
pub use value::SecretValue;
