//! # Observability Infrastructure
//!
//! Structured logging for the sidecar using the tracing ecosystem. Request
//! spans come from `tower-http`'s `TraceLayer` on the router; this module only
//! installs the global subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::{Error, Result};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured default level applies.
/// Log lines are human-readable text by default, JSON when configured (for
/// log collectors in container deployments).
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let result = if config.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing() {
        let config = ObservabilityConfig::default();
        // May succeed or fail depending on whether a subscriber is already set
        let result = init_tracing(&config);
        assert!(result.is_ok() || result.is_err());
    }
}
