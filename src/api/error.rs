use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::secrets::StoreError;

/// HTTP-boundary error. Every failing code path resolves to one of these, so
/// callers always receive a JSON body with an appropriate status.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Default mapping from the store taxonomy to HTTP responses.
///
/// The mapped messages are fixed short strings; backend detail never reaches
/// the caller (it is logged at the handler boundary instead).
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound("Secret not found".to_string()),
            StoreError::InvalidParameter { .. } => {
                ApiError::BadRequest("Invalid parameter".to_string())
            }
            StoreError::InvalidRequest { .. } => {
                ApiError::BadRequest("Invalid request".to_string())
            }
            StoreError::DecryptionFailure { .. } => {
                ApiError::Internal("Secret decryption failed".to_string())
            }
            StoreError::ServiceFailure { .. } => {
                ApiError::Internal("Internal service error".to_string())
            }
            StoreError::Unknown { .. } => ApiError::Internal("Unknown error".to_string()),
            StoreError::Unexpected { .. } => {
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}
