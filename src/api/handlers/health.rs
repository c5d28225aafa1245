//! Health check endpoint for liveness probing

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status (always "healthy" when responding)
    #[schema(example = "healthy")]
    pub status: String,
}

/// Health check endpoint
///
/// Returns 200 OK when the HTTP server is operational. Deliberately makes no
/// backend call, so it reports liveness even when the secrets backend is
/// unreachable. Suitable for container orchestrator health checks and load
/// balancer probes.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy".to_string() }))
}
