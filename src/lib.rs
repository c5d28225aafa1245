//! # Secrets Sidecar
//!
//! A sidecar HTTP service that exposes AWS Secrets Manager to co-located
//! workloads over a minimal read-only API. Containers talk to `localhost`
//! instead of carrying AWS SDK credentials plumbing themselves; the sidecar
//! qualifies every request with a configured name prefix and translates
//! backend error codes into HTTP statuses.
//!
//! ## Architecture
//!
//! ```text
//! HTTP API Layer → Secret Store Abstraction → AWS Secrets Manager
//!      ↓
//! Error Mapping + Structured Logging
//! ```
//!
//! One request is one unit of work: no caching, no retries, no shared
//! mutable state. The store handle and prefix are constructed once at
//! startup and shared read-only by all request handlers.

pub mod api;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
