//! HTTP request handlers

pub mod health;
pub mod secrets;

pub use health::health_handler;
pub use secrets::{get_secret_handler, get_secret_key_handler, list_secrets_handler};
