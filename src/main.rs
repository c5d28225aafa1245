use std::sync::Arc;

use secrets_sidecar::{
    api::{build_router, start_api_server},
    observability::init_tracing,
    secrets::AwsSecretStore,
    Config, Result, APP_NAME, VERSION,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing).
    // This must happen before any config is read from the environment.
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let config = Config::from_env()?;
    init_tracing(&config.observability)?;

    info!(app_name = APP_NAME, version = VERSION, "Starting secrets sidecar");
    info!(
        bind_address = %config.server.bind_address,
        port = config.server.port,
        region = %config.secrets.region,
        prefix = %config.secrets.prefix,
        "Loaded configuration from environment"
    );

    let store = Arc::new(AwsSecretStore::connect(&config.secrets).await);
    let router = build_router(store, &config.secrets.prefix);

    start_api_server(&config.server, router).await
}
