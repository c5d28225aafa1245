use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::HealthResponse;
use crate::api::handlers::secrets::{SecretListResponse, SecretValueResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::secrets::get_secret_handler,
        crate::api::handlers::secrets::list_secrets_handler,
        crate::api::handlers::secrets::get_secret_key_handler,
    ),
    components(
        schemas(HealthResponse, SecretValueResponse, SecretListResponse)
    ),
    tags(
        (name = "health", description = "Liveness probing"),
        (name = "secrets", description = "Secret retrieval")
    ),
    info(
        title = "Secrets Sidecar API",
        description = "Read-only HTTP facade over AWS Secrets Manager"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
