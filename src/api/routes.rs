use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::secrets::SecretStore;

use super::{
    docs,
    handlers::{get_secret_handler, get_secret_key_handler, health_handler, list_secrets_handler},
};

/// Shared request-handler context: one long-lived store handle plus the
/// configured name prefix. Both are read-only after startup, so the state is
/// freely cloned into every handler without locking.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn SecretStore>,
    pub prefix: Arc<str>,
}

impl ApiState {
    /// Fully-qualified secret identifier: prefix + caller-supplied name.
    /// Plain concatenation; the backend decides whether the result is valid.
    pub fn qualified_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

pub fn build_router(store: Arc<dyn SecretStore>, prefix: &str) -> Router {
    let state = ApiState { store, prefix: Arc::from(prefix) };

    Router::new()
        .route("/health", get(health_handler))
        .route("/secrets", get(list_secrets_handler))
        .route("/secret/{name}", get(get_secret_handler))
        .route("/secret/{name}/{key}", get(get_secret_key_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .merge(docs::docs_router())
}
