//! HTTP API for the secrets sidecar.
//!
//! Four routes: a health probe, secret fetch, secret listing, and single-key
//! projection out of a JSON secret. All responses are JSON; every failure
//! path resolves to an [`error::ApiError`] so callers never see an unhandled
//! fault.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::{build_router, ApiState};
pub use server::start_api_server;
