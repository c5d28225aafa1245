//! Secret retrieval HTTP handlers.
//!
//! Each handler builds the fully-qualified secret identifier by prepending
//! the configured prefix, issues exactly one backend call, and maps the
//! outcome to a JSON response. Backend error detail is logged here and never
//! returned to the caller.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::{error, instrument};
use utoipa::ToSchema;

use crate::api::{error::ApiError, routes::ApiState};
use crate::secrets::{SecretValue, StoreError};

/// A secret value, served under `value` as parsed JSON when the payload is
/// JSON, otherwise as a raw string.
#[derive(Debug, Serialize, ToSchema)]
pub struct SecretValueResponse {
    pub value: serde_json::Value,
}

/// Secret names visible to this sidecar, with the configured prefix removed.
#[derive(Debug, Serialize, ToSchema)]
pub struct SecretListResponse {
    pub secrets: Vec<String>,
}

/// Fetch a secret by name
///
/// The raw value is served as parsed JSON when it parses as JSON, otherwise
/// verbatim as a string.
#[utoipa::path(
    get,
    path = "/secret/{name}",
    params(
        ("name" = String, Path, description = "Secret name, without the configured prefix"),
    ),
    responses(
        (status = 200, description = "Secret value", body = SecretValueResponse),
        (status = 400, description = "Backend rejected the request"),
        (status = 404, description = "Secret not found"),
        (status = 500, description = "Backend or internal failure"),
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(secret_name = %name))]
pub async fn get_secret_handler(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<SecretValueResponse>, ApiError> {
    let qualified = state.qualified_name(&name);

    let raw = state.store.get_secret(&qualified).await.map_err(|err| {
        error!(secret_name = %name, error = %err, "Failed to retrieve secret");
        ApiError::from(err)
    })?;

    Ok(Json(SecretValueResponse { value: SecretValue::parse(raw).into_json() }))
}

/// List secret names
///
/// Names are filtered by the configured prefix on the backend side; the
/// prefix is stripped before the names are returned, in backend order.
#[utoipa::path(
    get,
    path = "/secrets",
    responses(
        (status = 200, description = "Secret names in backend order", body = SecretListResponse),
        (status = 500, description = "Backend or internal failure"),
    ),
    tag = "secrets"
)]
#[instrument(skip(state))]
pub async fn list_secrets_handler(
    State(state): State<ApiState>,
) -> Result<Json<SecretListResponse>, ApiError> {
    let names = state.store.list_secret_names(&state.prefix).await.map_err(|err| {
        error!(error = %err, "Failed to list secrets");
        ApiError::Internal("Failed to list secrets".to_string())
    })?;

    let secrets = names
        .iter()
        .map(|name| name.strip_prefix(state.prefix.as_ref()).unwrap_or(name).to_string())
        .collect();

    Ok(Json(SecretListResponse { secrets }))
}

/// Fetch a single key from a JSON-structured secret
#[utoipa::path(
    get,
    path = "/secret/{name}/{key}",
    params(
        ("name" = String, Path, description = "Secret name, without the configured prefix"),
        ("key" = String, Path, description = "Key within the JSON secret"),
    ),
    responses(
        (status = 200, description = "Value of the requested key", body = SecretValueResponse),
        (status = 400, description = "Secret is not JSON"),
        (status = 404, description = "Secret or key not found"),
        (status = 500, description = "Backend or internal failure"),
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(secret_name = %name, key = %key))]
pub async fn get_secret_key_handler(
    State(state): State<ApiState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<SecretValueResponse>, ApiError> {
    let qualified = state.qualified_name(&name);

    let raw = state.store.get_secret(&qualified).await.map_err(|err| {
        error!(secret_name = %name, error = %err, "Failed to retrieve secret");
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound("Secret not found".to_string()),
            StoreError::Unexpected { .. } => {
                ApiError::Internal("Internal server error".to_string())
            }
            _ => ApiError::Internal("Failed to retrieve secret".to_string()),
        }
    })?;

    let secret = SecretValue::parse(raw);
    match secret.as_object() {
        Some(map) => match map.get(&key) {
            Some(value) => Ok(Json(SecretValueResponse { value: value.clone() })),
            None => Err(ApiError::NotFound(format!("Key '{}' not found in secret", key))),
        },
        None => Err(ApiError::BadRequest("Secret is not JSON format".to_string())),
    }
}
