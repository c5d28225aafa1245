//! # Configuration Management
//!
//! Environment-driven configuration for the secrets sidecar. Everything is
//! read once at process start; nothing here is mutated afterwards.

use crate::{Error, Result};

/// Port the sidecar's deployment manifests expect.
const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub secrets: SecretsConfig,
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0".to_string(), port: DEFAULT_PORT }
    }
}

/// Secrets backend configuration
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// AWS region for the Secrets Manager client
    pub region: String,

    /// Prefix prepended to every caller-supplied secret name and stripped
    /// from list results
    pub prefix: String,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self { region: "us-east-1".to_string(), prefix: String::new() }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON-formatted log lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), json_logs: false }
    }
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("SIDECAR_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::config(format!("Invalid SIDECAR_PORT '{}': {}", raw, e)))?,
            Err(_) => DEFAULT_PORT,
        };

        let bind_address =
            std::env::var("SIDECAR_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());

        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let prefix = std::env::var("SECRETS_PREFIX").unwrap_or_default();

        let log_level = std::env::var("SIDECAR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let json_logs = std::env::var("SIDECAR_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            server: ServerConfig { bind_address, port },
            secrets: SecretsConfig { region, prefix },
            observability: ObservabilityConfig { log_level, json_logs },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.secrets.region, "us-east-1");
        assert_eq!(config.secrets.prefix, "");
    }

    // Environment variables are process-global, so the from_env cases run in
    // a single test to avoid interleaving with each other.
    #[test]
    fn test_config_from_env() {
        env::set_var("SIDECAR_PORT", "9090");
        env::set_var("SIDECAR_BIND_ADDRESS", "127.0.0.1");
        env::set_var("SECRETS_PREFIX", "myapp/");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.secrets.prefix, "myapp/");

        env::set_var("SIDECAR_LOG_FORMAT", "JSON");
        let config = Config::from_env().unwrap();
        assert!(config.observability.json_logs);
        env::remove_var("SIDECAR_LOG_FORMAT");

        env::set_var("SIDECAR_PORT", "not-a-port");
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));

        env::remove_var("SIDECAR_PORT");
        env::remove_var("SIDECAR_BIND_ADDRESS");
        env::remove_var("SECRETS_PREFIX");
    }
}
