//! AWS Secrets Manager store implementation.
//!
//! Wraps the official SDK client and collapses its error hierarchy into
//! [`StoreError`] at this boundary. Credentials come from the standard AWS
//! provider chain (environment, task role, instance profile); only the region
//! is taken from sidecar configuration.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType};
use aws_sdk_secretsmanager::Client;
use tracing::{debug, info};

use crate::config::SecretsConfig;

use super::error::{Result, StoreError};
use super::store::SecretStore;

/// AWS Secrets Manager backend.
#[derive(Debug, Clone)]
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    /// Build a store from an already-constructed SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store for the configured region using the default AWS
    /// credential provider chain.
    pub async fn connect(config: &SecretsConfig) -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        info!(region = %config.region, "Initialized AWS Secrets Manager client");

        Self { client: Client::new(&shared_config) }
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        debug!(secret_name = %name, "Fetching secret from AWS Secrets Manager");

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| classify_sdk_error("GetSecretValue", Some(name), err))?;

        match output.secret_string() {
            Some(value) => Ok(value.to_string()),
            // Binary-only secrets have no SecretString; the sidecar serves
            // string material only.
            None => Err(StoreError::unexpected(format!(
                "Secret '{}' has no string value",
                name
            ))),
        }
    }

    async fn list_secret_names(&self, prefix: &str) -> Result<Vec<String>> {
        debug!(prefix = %prefix, "Listing secrets from AWS Secrets Manager");

        let mut names = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let mut request = self.client.list_secrets();
            if !prefix.is_empty() {
                let filter = Filter::builder()
                    .key(FilterNameStringType::Name)
                    .values(prefix)
                    .build();
                request = request.filters(filter);
            }
            if let Some(ref next) = token {
                request = request.next_token(next);
            }

            let response = request
                .send()
                .await
                .map_err(|err| classify_sdk_error("ListSecrets", None, err))?;

            for entry in response.secret_list() {
                if let Some(name) = entry.name() {
                    names.push(name.to_string());
                }
            }

            match response.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => break,
            }
        }

        Ok(names)
    }
}

/// Collapse an SDK error into the closed [`StoreError`] taxonomy.
///
/// Service errors are classified by their error code; everything else
/// (dispatch failures, timeouts, malformed responses) is unexpected.
fn classify_sdk_error<E>(operation: &str, secret_name: Option<&str>, err: SdkError<E>) -> StoreError
where
    E: ProvideErrorMetadata,
{
    match &err {
        SdkError::ServiceError(context) => {
            let code = context.err().code().unwrap_or("Unknown");
            let message = context
                .err()
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} reported {}", operation, code));
            classify_code(code, message, secret_name)
        }
        _ => StoreError::unexpected(format!("{} failed: {}", operation, err)),
    }
}

/// Map a backend error code onto a [`StoreError`] variant.
///
/// The boto-style `*Exception` suffixes are matched alongside the bare API
/// codes because the service has surfaced both over time.
fn classify_code(code: &str, message: String, secret_name: Option<&str>) -> StoreError {
    match code {
        "ResourceNotFoundException" => {
            StoreError::not_found(secret_name.unwrap_or("<unnamed>"))
        }
        "InvalidParameterException" => StoreError::invalid_parameter(message),
        "InvalidRequestException" => StoreError::invalid_request(message),
        "DecryptionFailure" | "DecryptionFailureException" => {
            StoreError::decryption_failure(message)
        }
        "InternalServiceError" | "InternalServiceErrorException" => {
            StoreError::service_failure(message)
        }
        other => StoreError::unknown(other, message),
    }
}
